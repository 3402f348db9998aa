//! What the host CLI asks for before it ever runs a command.
//!
//! The host calls the plugin once just to discover its commands, so this
//! module must stay free of I/O.

use std::collections::BTreeMap;

use crate::prelude::*;

pub const PLUGIN_NAME: &str = "accounting-report";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub version: VersionType,
    pub min_cli_version: VersionType,
    pub commands: Vec<CommandMetadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionType {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub help_text: &'static str,
    pub usage_details: Usage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Usage {
    pub usage: &'static str,

    /// Option name to its help line. Ordered so the output is stable.
    pub options: BTreeMap<&'static str, &'static str>,
}

pub fn describe_commands() -> PluginMetadata {
    let options = BTreeMap::from([
        (
            "output-json",
            "if set prints JSON to stdout instead of a rendered table",
        ),
        (
            "applications",
            "report application instance usage (default)",
        ),
        (
            "services",
            "report service instance usage, takes precedence over --applications",
        ),
    ]);

    PluginMetadata {
        name: PLUGIN_NAME,
        version: VersionType {
            major: 0,
            minor: 0,
            build: 1,
        },
        min_cli_version: VersionType {
            major: 6,
            minor: 7,
            build: 0,
        },
        commands: vec![CommandMetadata {
            name: PLUGIN_NAME,
            help_text: "lists usage data of purchased resources",
            usage_details: Usage {
                usage: "cf accounting-report [--output-json] [--applications] [--services]",
                options,
            },
        }],
    }
}
