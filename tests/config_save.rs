//! Saving to the user config file
//!
//! Kept in its own test binary because it points XDG_CONFIG_HOME at a temp
//! dir for the whole process.

use draft_anchor::config::DraftConfig;
use draft_anchor::config_paths;
use draft_anchor::output::OutputFormat;

#[cfg(not(target_os = "windows"))]
#[test]
fn test_save_writes_user_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = DraftConfig {
        overlay_debounce_ms: 40,
        format: OutputFormat::Json,
    };
    let path = config.save().unwrap();

    assert_eq!(Some(path.clone()), config_paths::config_file());
    assert!(path.starts_with(dir.path()));
    assert_eq!(DraftConfig::load(), config);
}
