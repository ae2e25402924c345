//! Tests for the config module.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Parse a record from a JSON string (for testing).
fn from_json(json: &str) -> Result<ExternalResources, ConfigError> {
    let resources: ExternalResources = serde_json::from_str(json)?;
    Ok(resources)
}

fn full_json() -> &'static str {
    r#"{
        "Env": 1,
        "AuthNHost": "auth.example.com",
        "AuthNType": "http",
        "AuthNPort": 8250,
        "Dbuser": "ec2-user",
        "Dbname": "accord",
        "Dbpass": "dbsecret",
        "Dbhost": "db.example.com",
        "Dbport": 3306,
        "Dbtype": "mysql",
        "SmtpHost": "smtp.example.com",
        "SmtpPort": 587,
        "SmtpLogin": "mailer",
        "SmtpPass": "mailsecret",
        "RRDbuser": "rruser",
        "RRDbname": "rentroll",
        "RRDbpass": "rrsecret",
        "RRDbhost": "rr.example.com",
        "RRDbport": 3307,
        "RRDbtype": "mysql",
        "MojoDbuser": "mojouser",
        "MojoDbname": "mojo",
        "MojoDbpass": "mojosecret",
        "MojoDbhost": "mojo.example.com",
        "MojoDbport": 3308,
        "MojoDbtype": "mysql",
        "MojoWebAddr": "http://mojo.example.com:8275",
        "WREISDbuser": "wuser",
        "WREISDbname": "wreis",
        "WREISDbpass": "wsecret",
        "WREISDbhost": "wreis.example.com",
        "WREISDbport": 3309,
        "WREISDbtype": "mysql",
        "Timezone": "America/Chicago",
        "SessionTimeout": 15,
        "RootHandler": "home",
        "Tester1Name": "tester1",
        "Tester1Pass": "tp1",
        "Tester2Name": "tester2",
        "Tester2Pass": "tp2",
        "RepoUser": "repouser",
        "RepoPass": "reposecret",
        "RepoURL": "https://artifactory.example.com",
        "S3Region": "ap-south-1",
        "S3BucketHost": "https://s3.ap-south-1.amazonaws.com",
        "S3BucketName": "upload-profile-image",
        "S3BucketKeyID": "AKIAEXAMPLE",
        "S3BucketKey": "s3secret",
        "CryptoKey": "0123456789abcdef0123456789abcdef",
        "MapKey": "mapkey123"
    }"#
}

// ==================== Field loading tests ====================

#[test]
fn test_load_every_field() {
    let cfg = from_json(full_json()).unwrap();

    assert_eq!(cfg.env, Environment::Production);

    assert_eq!(cfg.auth.host, "auth.example.com");
    assert_eq!(cfg.auth.auth_type, "http");
    assert_eq!(cfg.auth.port, 8250);

    assert_eq!(cfg.db.user, "ec2-user");
    assert_eq!(cfg.db.name, "accord");
    assert_eq!(cfg.db.pass, "dbsecret");
    assert_eq!(cfg.db.host, "db.example.com");
    assert_eq!(cfg.db.port, 3306);
    assert_eq!(cfg.db.db_type, "mysql");

    assert_eq!(cfg.rr_db.user, "rruser");
    assert_eq!(cfg.rr_db.name, "rentroll");
    assert_eq!(cfg.rr_db.pass, "rrsecret");
    assert_eq!(cfg.rr_db.host, "rr.example.com");
    assert_eq!(cfg.rr_db.port, 3307);
    assert_eq!(cfg.rr_db.db_type, "mysql");

    assert_eq!(cfg.mojo_db.user, "mojouser");
    assert_eq!(cfg.mojo_db.port, 3308);
    assert_eq!(cfg.mojo_db.web_addr, "http://mojo.example.com:8275");

    assert_eq!(cfg.wreis_db.user, "wuser");
    assert_eq!(cfg.wreis_db.name, "wreis");
    assert_eq!(cfg.wreis_db.port, 3309);

    assert_eq!(cfg.smtp.host, "smtp.example.com");
    assert_eq!(cfg.smtp.port, 587);
    assert_eq!(cfg.smtp.login, "mailer");
    assert_eq!(cfg.smtp.pass, "mailsecret");

    assert_eq!(cfg.s3.region, "ap-south-1");
    assert_eq!(cfg.s3.bucket_host, "https://s3.ap-south-1.amazonaws.com");
    assert_eq!(cfg.s3.bucket_name, "upload-profile-image");
    assert_eq!(cfg.s3.key_id, "AKIAEXAMPLE");
    assert_eq!(cfg.s3.key, "s3secret");

    assert_eq!(cfg.repo.user, "repouser");
    assert_eq!(cfg.repo.pass, "reposecret");
    assert_eq!(cfg.repo.url, "https://artifactory.example.com");

    assert_eq!(cfg.testers.tester1_name, "tester1");
    assert_eq!(cfg.testers.tester1_pass, "tp1");
    assert_eq!(cfg.testers.tester2_name, "tester2");
    assert_eq!(cfg.testers.tester2_pass, "tp2");

    assert_eq!(cfg.timezone, "America/Chicago");
    assert_eq!(cfg.session_timeout, 15);
    assert_eq!(cfg.root_handler, "home");
    assert_eq!(cfg.crypto_key, "0123456789abcdef0123456789abcdef");
    assert_eq!(cfg.map_key, "mapkey123");
}

#[test]
fn test_missing_timezone_defaults_to_gmt() {
    let cfg = from_json(r#"{"Dbuser": "ec2-user"}"#).unwrap();
    assert_eq!(cfg.timezone, "GMT");
}

#[test]
fn test_timezone_from_file_wins() {
    let cfg = from_json(r#"{"Timezone": "Asia/Kolkata"}"#).unwrap();
    assert_eq!(cfg.timezone, "Asia/Kolkata");
}

#[test]
fn test_missing_fields_keep_zero_values() {
    let cfg = from_json(r#"{"Dbuser": "ec2-user"}"#).unwrap();

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.db.user, "ec2-user");
    assert!(cfg.db.pass.is_empty());
    assert_eq!(cfg.db.port, 0);
    assert!(cfg.rr_db.user.is_empty());
    assert_eq!(cfg.session_timeout, 0);
}

#[test]
fn test_unknown_keys_ignored() {
    let cfg = from_json(r#"{"Dbuser": "ec2-user", "NoSuchField": 42}"#).unwrap();
    assert_eq!(cfg.db.user, "ec2-user");
}

#[test]
fn test_default_record() {
    let cfg = ExternalResources::default();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.timezone, "GMT");
    assert!(cfg.db.user.is_empty());
}

// ==================== Environment parsing tests ====================

#[test]
fn test_env_values() {
    assert_eq!(
        from_json(r#"{"Env": 0}"#).unwrap().env,
        Environment::Development
    );
    assert_eq!(
        from_json(r#"{"Env": 1}"#).unwrap().env,
        Environment::Production
    );
    assert_eq!(from_json(r#"{"Env": 2}"#).unwrap().env, Environment::Qa);
}

#[test]
fn test_env_out_of_range() {
    let result = from_json(r#"{"Env": 7}"#);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("unknown environment value")
    );
}

#[test]
fn test_env_display() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(Environment::Qa.to_string(), "QA");
}

// ==================== Type mismatch tests ====================

#[test]
fn test_string_where_integer_expected() {
    let result = from_json(r#"{"Dbport": "not-a-number"}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_malformed_json() {
    let result = from_json("{ not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(full_json().as_bytes()).unwrap();

    let cfg = ExternalResources::load(file.path()).unwrap();

    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.db.user, "ec2-user");
    assert_eq!(cfg.timezone, "America/Chicago");
}

#[test]
fn test_load_is_idempotent() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(full_json().as_bytes()).unwrap();

    let first = ExternalResources::load(file.path()).unwrap();
    let second = ExternalResources::load(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_file_not_found() {
    let result = ExternalResources::load("nonexistent_config.json");
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("config file not found")
    );
}
