use super::*;

#[test]
fn test_init_configures_chip() {
    let (mut imu, chip, delay) = driver(FakeChip::lsm9ds1());
    imu.init().unwrap();

    let chip = chip.lock().unwrap();
    assert_eq!(chip.writes[0], (LSM9DS1_DEFAULT_AG_ADDR, CTRL_REG8, CTRL_REG8_BOOT));
    assert_eq!(*delay.waits.lock().unwrap(), vec![LSM9DS1_REBOOT_WAIT_MS]);

    let ag = LSM9DS1_DEFAULT_AG_ADDR;
    let mag = LSM9DS1_DEFAULT_MAG_ADDR;
    assert_eq!(chip.get(ag, CTRL_REG8), 0x44);
    assert_eq!(chip.get(ag, CTRL_REG1_G), 0x60);
    assert_eq!(chip.get(ag, CTRL_REG6_XL), 0x60);
    assert_eq!(chip.get(mag, CTRL_REG1_M), 0xFC);
    assert_eq!(chip.get(mag, CTRL_REG2_M), 0x00);
    assert_eq!(chip.get(mag, CTRL_REG3_M), 0x00);
    assert_eq!(chip.get(mag, CTRL_REG4_M), 0x0C);
    assert_eq!(chip.get(mag, CTRL_REG5_M), 0x40);
}

#[test]
fn test_init_applies_custom_params() {
    let bus = FakeBus::new(FakeChip::lsm9ds1());
    let chip = bus.chip.clone();
    let params = Params {
        accel_scale: AccelScaleRange::G8,
        gyro_rate: GyroDataRate::Hz238,
        gyro_scale: GyroScaleRange::D2000,
        mag_scale: MagScaleRange::Gauss12,
        ..Params::default()
    };
    let mut imu = Lsm9ds1::new(bus, FakeDelay::default(), params);
    imu.init().unwrap();

    assert_eq!(chip.lock().unwrap().get(LSM9DS1_DEFAULT_AG_ADDR, CTRL_REG1_G), 0x98);
    assert_eq!(imu.get_accel_scale().unwrap(), AccelScaleRange::G8);
    assert_eq!(imu.get_gyro_scale().unwrap(), Some(GyroScaleRange::D2000));
    assert_eq!(imu.get_mag_scale().unwrap(), MagScaleRange::Gauss12);
}

#[test]
fn test_init_rejects_wrong_ag_device() {
    let mut chip = FakeChip::lsm9ds1();
    // An MPU6050 answering on the same address.
    chip.set(LSM9DS1_DEFAULT_AG_ADDR, WHO_AM_I, 0x34);
    let (mut imu, chip, _) = driver(chip);

    match imu.init() {
        Err(Error::WrongDevice { register, expected, found }) => {
            assert_eq!(register, WHO_AM_I);
            assert_eq!(expected, LSM9DS1_AG_DEVICE_ID);
            assert_eq!(found, 0x34);
        },
        other => panic!("unexpected result {:?}", other),
    }
    // Only the reboot went out, nothing got configured.
    assert_eq!(chip.lock().unwrap().writes.len(), 1);
}

#[test]
fn test_init_rejects_missing_magnetometer() {
    let mut chip = FakeChip::lsm9ds1();
    chip.set(LSM9DS1_DEFAULT_MAG_ADDR, WHO_AM_I_M, 0x00);
    let (mut imu, _, _) = driver(chip);

    assert!(matches!(imu.init(), Err(Error::WrongDevice { register: WHO_AM_I_M, found: 0x00, .. })));
}

#[test]
fn test_init_reports_bus_error() {
    let mut chip = FakeChip::lsm9ds1();
    chip.fail = true;
    let (mut imu, _, delay) = driver(chip);

    assert!(matches!(imu.init(), Err(Error::Bus(FakeBusError::Nack))));
    assert!(delay.waits.lock().unwrap().is_empty());
}

#[test]
fn test_init_detects_config_mismatch() {
    let mut chip = FakeChip::lsm9ds1();
    chip.read_only = Some((LSM9DS1_DEFAULT_MAG_ADDR, CTRL_REG1_M));
    let (mut imu, _, _) = driver(chip);

    match imu.init() {
        Err(Error::Config { register, expected, found }) => {
            assert_eq!(register, CTRL_REG1_M);
            assert_eq!(expected, 0xFC);
            assert_eq!(found, 0x00);
        },
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_init_invalid_params_touch_nothing() {
    let bus = FakeBus::new(FakeChip::lsm9ds1());
    let chip = bus.chip.clone();
    let params = Params { gyro_rate: GyroDataRate::PowerDown, ..Params::default() };
    let mut imu = Lsm9ds1::new(bus, FakeDelay::default(), params);

    assert!(matches!(imu.init(), Err(Error::InvalidParams(_))));
    assert!(chip.lock().unwrap().writes.is_empty());
}

#[test]
fn test_read_scaling() {
    let mut chip = FakeChip::lsm9ds1();
    let ag = LSM9DS1_DEFAULT_AG_ADDR;
    let mag = LSM9DS1_DEFAULT_MAG_ADDR;
    chip.set_i16(ag, OUT_X_L_XL, 16384);
    chip.set_i16(ag, OUT_Y_L_XL, -16384);
    chip.set_i16(ag, OUT_Z_L_XL, 0);
    chip.set_i16(ag, OUT_X_L_G, 0);
    chip.set_i16(ag, OUT_Y_L_G, 1000);
    chip.set_i16(ag, OUT_Z_L_G, -2000);
    chip.set_i16(mag, OUT_X_L_M, 10000);
    chip.set_i16(mag, OUT_Y_L_M, 0);
    chip.set_i16(mag, OUT_Z_L_M, -5000);
    let (mut imu, _, _) = driver(chip);
    imu.init().unwrap();

    let acc = imu.read_acc().unwrap();
    assert!(approx_eq(acc.x, 16384.0 * 0.000061));
    assert!(approx_eq(acc.y, -16384.0 * 0.000061));
    assert!(approx_eq(acc.z, 0.0));

    let gyro = imu.read_gyro().unwrap();
    assert!(approx_eq(gyro.y, 8.75));
    assert!(approx_eq(gyro.z, -17.5));

    let mag = imu.read_mag().unwrap();
    assert!(approx_eq(mag.x, 1.4));
    assert!(approx_eq(mag.z, -0.7));
}

#[test]
fn test_read_temperature() {
    let mut chip = FakeChip::lsm9ds1();
    chip.set_i16(LSM9DS1_DEFAULT_AG_ADDR, OUT_TEMP_L, 80);
    let (mut imu, state, _) = driver(chip);
    assert!(approx_eq(imu.read_temp().unwrap(), 30.0));

    state.lock().unwrap().set_i16(LSM9DS1_DEFAULT_AG_ADDR, OUT_TEMP_L, -400);
    assert!(approx_eq(imu.read_temp().unwrap(), 0.0));
}

#[test]
fn test_power_down_keeps_scale() {
    let params = Params { accel_scale: AccelScaleRange::G4, ..Params::default() };
    let bus = FakeBus::new(FakeChip::lsm9ds1());
    let chip = bus.chip.clone();
    let mut imu = Lsm9ds1::new(bus, FakeDelay::default(), params);
    imu.init().unwrap();

    let ag = LSM9DS1_DEFAULT_AG_ADDR;
    let mag = LSM9DS1_DEFAULT_MAG_ADDR;

    imu.acc_power_down().unwrap();
    imu.gyro_power_down().unwrap();
    imu.mag_power_down().unwrap();
    {
        let chip = chip.lock().unwrap();
        assert_eq!(chip.get(ag, CTRL_REG6_XL), AccelScaleRange::G4.as_register());
        assert_eq!(chip.get(ag, CTRL_REG1_G) & ODR_MASK, 0);
        assert_eq!(chip.get(mag, CTRL_REG3_M), CTRL_REG3_M_MD_POWER_DOWN);
    }
    assert_eq!(imu.get_accel_scale().unwrap(), AccelScaleRange::G4);

    imu.acc_power_up().unwrap();
    imu.gyro_power_up().unwrap();
    imu.mag_power_up().unwrap();
    let chip = chip.lock().unwrap();
    assert_eq!(chip.get(ag, CTRL_REG6_XL), 0x70);
    assert_eq!(chip.get(ag, CTRL_REG1_G), 0x60);
    assert_eq!(chip.get(mag, CTRL_REG3_M), CTRL_REG3_M_MD_CONTINUOUS);
}

#[test]
fn test_release_returns_bus() {
    let (imu, state, _) = driver(FakeChip::lsm9ds1());
    let (bus, _) = imu.release();
    assert!(Arc::ptr_eq(&bus.chip, &state));
}
