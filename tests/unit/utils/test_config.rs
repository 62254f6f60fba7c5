use foodgram_client::utils::config::{get_env_or_default, get_env_or_none, get_env_path};
use std::env;
use std::path::PathBuf;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("FG_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("FG_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("FG_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("FG_MISSING_VAR");
        let result: String = get_env_or_default("FG_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("FG_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("FG_TEST_VAR_INVALID", 10_000);
        assert_eq!(result, 10_000);
        env::remove_var("FG_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("FG_TEST_VAR_OPTION", "123");
        let result: Option<u32> = get_env_or_none("FG_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("FG_TEST_VAR_OPTION");

        let missing: Option<u32> = get_env_or_none("FG_TEST_VAR_OPTION");
        assert_eq!(missing, None);
    }
}

#[test]
fn test_get_env_path_ignores_blank_values() {
    unsafe {
        env::set_var("FG_TEST_PATH", "  ");
        assert_eq!(get_env_path("FG_TEST_PATH"), None);

        env::set_var("FG_TEST_PATH", "/tmp/foodgram/token.json");
        assert_eq!(
            get_env_path("FG_TEST_PATH"),
            Some(PathBuf::from("/tmp/foodgram/token.json"))
        );
        env::remove_var("FG_TEST_PATH");
    }
}
