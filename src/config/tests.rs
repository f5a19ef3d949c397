use super::validation::validate_config;
use super::*;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn create_test_config() -> Config {
    Config {
        mode: Some(ModeKind::Circadian),
        bulb: Some("desk".to_string()),
        interval: None,
        latitude: Some(52.2297),
        longitude: Some(21.0122),
        day_temp: Some(6000),
        night_temp: Some(3000),
        day_brightness: Some(90),
        night_brightness: Some(20),
        transition_duration: Some(45),
        bpm: None,
        joystick_device: None,
    }
}

/// Run `f` with XDG_CONFIG_HOME pointing at `dir`, restoring it afterwards.
fn with_config_home<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", dir);
    }

    let result = f();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
    result
}

#[test]
#[serial]
fn test_config_load_default_creation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("bulbutil").join("bulbutil.toml");

    let result = with_config_home(temp_dir.path(), load);

    let config = result.unwrap();
    assert!(config_path.exists());
    assert_eq!(config.mode_kind(), ModeKind::Circadian);
    assert_eq!(config.latitude, None);
}

#[test]
#[serial]
fn test_config_load_existing_file_is_not_overwritten() {
    let temp_dir = tempdir().unwrap();
    let config_dir = temp_dir.path().join("bulbutil");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("bulbutil.toml"), "mode = \"music\"\nbpm = 90\n").unwrap();

    let config = with_config_home(temp_dir.path(), load).unwrap();

    assert_eq!(config.mode_kind(), ModeKind::Music);
    assert_eq!(config.bpm(), 90.0);
    let content = fs::read_to_string(config_dir.join("bulbutil.toml")).unwrap();
    assert_eq!(content, "mode = \"music\"\nbpm = 90\n");
}

#[test]
fn test_config_validation_basic() {
    assert!(validate_config(&create_test_config()).is_ok());
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn test_config_validation_temperature_range() {
    let mut config = create_test_config();
    config.day_temp = Some(MAXIMUM_TEMP + 1);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("day_temp"));

    let mut config = create_test_config();
    config.night_temp = Some(MINIMUM_TEMP - 1);
    assert!(validate_config(&config).is_err());

    config.night_temp = Some(MINIMUM_TEMP);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_config_validation_brightness_range() {
    let mut config = create_test_config();
    config.night_brightness = Some(0);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("night_brightness"));

    config.night_brightness = Some(101);
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_validation_coordinates() {
    let mut config = create_test_config();
    config.latitude = Some(90.5);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("latitude"));

    let mut config = create_test_config();
    config.longitude = Some(-181.0);
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config();
    config.latitude = Some(f64::NAN);
    assert!(validate_config(&config).is_err());

    config.latitude = Some(-90.0);
    config.longitude = Some(180.0);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_config_validation_interval_and_tempo() {
    let mut config = create_test_config();
    config.interval = Some(0.001);
    assert!(validate_config(&config).is_err());

    config.interval = Some(MAXIMUM_INTERVAL);
    assert!(validate_config(&config).is_ok());

    config.bpm = Some(MAXIMUM_BPM + 1.0);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("bpm"));
}

#[test]
fn test_config_validation_transition_duration() {
    let mut config = create_test_config();
    config.transition_duration = Some(MINIMUM_TRANSITION_DURATION - 1);
    assert!(validate_config(&config).is_err());

    config.transition_duration = Some(MAXIMUM_TRANSITION_DURATION);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_config_validation_empty_names() {
    let mut config = create_test_config();
    config.bulb = Some("  ".to_string());
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config();
    config.joystick_device = Some(String::new());
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_accessors_fill_defaults() {
    let config = Config::default();

    assert_eq!(config.mode_kind(), DEFAULT_MODE);
    assert_eq!(config.bulb_name(), DEFAULT_BULB);
    assert_eq!(config.bpm(), DEFAULT_BPM);
    assert_eq!(config.joystick_device(), DEFAULT_JOYSTICK_DEVICE);
    assert_eq!(
        config.tick_interval(ModeKind::Circadian),
        Duration::from_secs(60)
    );
    assert_eq!(
        config.tick_interval(ModeKind::Music),
        Duration::from_millis(100)
    );
    assert_eq!(
        config.tick_interval(ModeKind::Joystick),
        Duration::from_millis(50)
    );

    let settings = config.circadian_settings();
    assert_eq!(settings.day_temp, DEFAULT_DAY_TEMP);
    assert_eq!(settings.night_brightness, DEFAULT_NIGHT_BRIGHTNESS);
    assert_eq!(settings.transition, ChronoDuration::minutes(60));
}

#[test]
fn test_explicit_interval_applies_to_every_mode() {
    let config = Config {
        interval: Some(2.5),
        ..Config::default()
    };

    for kind in ModeKind::ALL {
        assert_eq!(config.tick_interval(kind), Duration::from_millis(2500));
    }
}

#[test]
fn test_unusable_interval_falls_back_to_mode_default() {
    // Public fields let callers skip validation
    for interval in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
        let config = Config {
            interval: Some(interval),
            ..Config::default()
        };
        assert_eq!(
            config.tick_interval(ModeKind::Circadian),
            Duration::from_secs(60),
            "{interval}"
        );
        assert_eq!(
            config.tick_interval(ModeKind::Music),
            Duration::from_millis(100),
            "{interval}"
        );
    }
}

#[test]
fn test_overrides_win_and_are_validated() {
    let mut config = create_test_config();
    let overrides = ConfigOverrides {
        mode: Some(ModeKind::Joystick),
        latitude: Some(-33.8688),
        longitude: None,
        interval: Some(0.5),
    };

    config.apply_overrides(&overrides).unwrap();
    assert_eq!(config.mode_kind(), ModeKind::Joystick);
    assert_eq!(config.latitude, Some(-33.8688));
    assert_eq!(config.longitude, Some(21.0122));
    assert_eq!(config.interval, Some(0.5));

    let bad = ConfigOverrides {
        longitude: Some(200.0),
        ..ConfigOverrides::default()
    };
    assert!(config.apply_overrides(&bad).is_err());
}

#[test]
fn test_load_from_path_parses_all_fields() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("bulbutil.toml");
    fs::write(
        &path,
        r#"
mode = "joystick"
bulb = "porch"
interval = 0.2
latitude = 40.7128
longitude = -74.0060
day_temp = 5000
night_temp = 2200
day_brightness = 80
night_brightness = 10
transition_duration = 30
bpm = 128.5
joystick_device = "/dev/input/js1"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.mode, Some(ModeKind::Joystick));
    assert_eq!(config.bulb_name(), "porch");
    assert_eq!(config.tick_interval(ModeKind::Joystick), Duration::from_millis(200));
    assert_eq!(config.latitude, Some(40.7128));
    assert_eq!(config.longitude, Some(-74.0060));
    assert_eq!(config.bpm(), 128.5);
    assert_eq!(config.joystick_device(), "/dev/input/js1");
    assert_eq!(
        config.circadian_settings().transition,
        ChronoDuration::minutes(30)
    );
}

#[test]
fn test_load_from_path_errors() {
    let temp_dir = tempdir().unwrap();

    let missing = temp_dir.path().join("missing.toml");
    let err = load_from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("not found"));

    let unknown_mode = temp_dir.path().join("unknown.toml");
    fs::write(&unknown_mode, "mode = \"disco\"\n").unwrap();
    let err = load_from_path(&unknown_mode).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));

    let out_of_range = temp_dir.path().join("range.toml");
    fs::write(&out_of_range, "day_temp = 20000\n").unwrap();
    let err = load_from_path(&out_of_range).unwrap_err();
    assert!(err.to_string().contains("day_temp"));
}

#[test]
fn test_geo_toml_overrides_coordinates() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("bulbutil.toml");
    fs::write(&path, "latitude = 10.0\nlongitude = 20.0\n").unwrap();
    fs::write(temp_dir.path().join("geo.toml"), "latitude = 51.5074\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(51.5074));
    assert_eq!(config.longitude, Some(20.0));
}

#[test]
fn test_geo_toml_is_validated_with_main_config() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("bulbutil.toml");
    fs::write(&path, "latitude = 10.0\n").unwrap();
    fs::write(temp_dir.path().join("geo.toml"), "latitude = 123.0\n").unwrap();

    assert!(load_from_path(&path).is_err());
}

#[test]
fn test_broken_geo_toml_is_ignored() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("bulbutil.toml");
    fs::write(&path, "latitude = 10.0\n").unwrap();
    fs::write(temp_dir.path().join("geo.toml"), "latitude = [not toml").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(10.0));
}
