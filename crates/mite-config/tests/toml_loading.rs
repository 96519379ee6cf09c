//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use mite_config::{ConfigError, InputFormat, MiteConfig, OutputFormat};
use mite_core::enums::{Quality, Status};
use std::path::PathBuf;

#[test]
fn loads_every_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[input]
format = "mite"
group = "Submission"

[output]
format = "html"
pretty = false

[submission]
status = "active"
quality = "high"

[schema]
path = "schemas/mite-1.4.json"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(MiteConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = MiteConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.input.format, InputFormat::Mite);
        assert_eq!(config.input.group, "Submission");
        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(!config.output.pretty);
        assert_eq!(config.submission.status().unwrap(), Status::Active);
        assert_eq!(config.submission.quality().unwrap(), Quality::High);
        assert_eq!(
            config.schema.path,
            Some(PathBuf::from("schemas/mite-1.4.json"))
        );
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\nformat = \"html\"\n")?;

        let figment = Figment::from(Serialized::defaults(MiteConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = MiteConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(config.output.pretty);
        assert_eq!(config.input.group, "Tailoring");
        assert_eq!(config.submission.status, "pending");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mite")?;
        jail.create_file(".mite/config.toml", "[input]\nformat = \"mite\"\n")?;

        let config = MiteConfig::load().expect("config loads");

        assert_eq!(config.input.format, InputFormat::Mite);
        Ok(())
    });
}

#[test]
fn unknown_output_format_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\nformat = \"pdf\"\n")?;

        let figment = Figment::from(Serialized::defaults(MiteConfig::default()))
            .merge(Toml::file("config.toml"));

        assert!(matches!(
            MiteConfig::from_figment(&figment),
            Err(ConfigError::Figment(_))
        ));
        Ok(())
    });
}

#[test]
fn unknown_quality_is_an_invalid_value() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[submission]\nquality = \"stellar\"\n")?;

        let figment = Figment::from(Serialized::defaults(MiteConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = MiteConfig::from_figment(&figment).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "submission.quality"
        ));
        Ok(())
    });
}
