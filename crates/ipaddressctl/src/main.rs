// # ipaddressctl
//
// Thin front end over ipaddress-core. It reads a static address
// configuration from environment variables, applies it to a fresh record
// and logs the result. All record logic lives in ipaddress-core.
//
// ## Configuration
//
// - `IPADDRESS_METHOD`: ipv4, ipv6 or off (default off)
// - `IPADDRESS_ADDRESS`: local address
// - `IPADDRESS_NETMASK`: dotted-decimal netmask (ipv4)
// - `IPADDRESS_PREFIX_LENGTH`: prefix length (ipv6, default 64)
// - `IPADDRESS_GATEWAY`: default gateway
// - `IPADDRESS_PEER`: point-to-point peer
// - `IPADDRESS_CONFIG_JSON`: JSON-encoded configuration, overrides the above
// - `IPADDRESS_LOG_LEVEL`: trace, debug, info, warn or error (default info)
//
// ## Example
//
// ```bash
// export IPADDRESS_METHOD=ipv4
// export IPADDRESS_ADDRESS=10.0.0.5
// export IPADDRESS_NETMASK=255.255.255.0
// export IPADDRESS_GATEWAY=10.0.0.1
//
// ipaddressctl
// ```

use anyhow::{Context, Result};
use ipaddress_core::{AddressConfig, IpAddress};
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum CtlExitCode {
    /// Record populated
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Applying the configuration failed
    RuntimeError = 2,
}

impl From<CtlExitCode> for ExitCode {
    fn from(code: CtlExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Raw settings read from the environment
struct Settings {
    method: String,
    address: Option<String>,
    netmask: Option<String>,
    prefix_length: Option<String>,
    gateway: Option<String>,
    peer: Option<String>,
    config_json: Option<String>,
    log_level: String,
}

impl Settings {
    fn from_env() -> Self {
        Self {
            method: env::var("IPADDRESS_METHOD").unwrap_or_else(|_| "off".to_string()),
            address: env::var("IPADDRESS_ADDRESS").ok(),
            netmask: env::var("IPADDRESS_NETMASK").ok(),
            prefix_length: env::var("IPADDRESS_PREFIX_LENGTH").ok(),
            gateway: env::var("IPADDRESS_GATEWAY").ok(),
            peer: env::var("IPADDRESS_PEER").ok(),
            config_json: env::var("IPADDRESS_CONFIG_JSON").ok(),
            log_level: env::var("IPADDRESS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    fn log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!(
                "IPADDRESS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                other
            ),
        }
    }

    /// Build the address configuration these settings describe
    fn address_config(&self) -> Result<AddressConfig> {
        let config = match &self.config_json {
            Some(json) => {
                AddressConfig::from_json(json).context("IPADDRESS_CONFIG_JSON is not valid")?
            }
            None => self.config_from_vars()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Build the configuration from the individual `IPADDRESS_*` variables
    fn config_from_vars(&self) -> Result<AddressConfig> {
        let config = match self.method.to_lowercase().as_str() {
            "ipv4" => {
                if let Some(prefix_length) = &self.prefix_length {
                    anyhow::bail!(
                        "IPADDRESS_PREFIX_LENGTH '{}' is not used with IPADDRESS_METHOD=ipv4. \
                        Set IPADDRESS_NETMASK instead.",
                        prefix_length
                    );
                }
                AddressConfig::Ipv4 {
                    address: self.required_address()?,
                    netmask: self.netmask.clone(),
                    gateway: self.gateway.clone(),
                    peer: self.peer.clone(),
                }
            }
            "ipv6" => {
                if let Some(netmask) = &self.netmask {
                    anyhow::bail!(
                        "IPADDRESS_NETMASK '{}' is not used with IPADDRESS_METHOD=ipv6. \
                        Set IPADDRESS_PREFIX_LENGTH instead.",
                        netmask
                    );
                }
                AddressConfig::Ipv6 {
                    address: self.required_address()?,
                    prefix_length: match &self.prefix_length {
                        Some(raw) => raw.parse().with_context(|| {
                            format!("IPADDRESS_PREFIX_LENGTH '{}' is not a number", raw)
                        })?,
                        None => 64,
                    },
                    gateway: self.gateway.clone(),
                    peer: self.peer.clone(),
                }
            }
            "off" => AddressConfig::Off,
            other => anyhow::bail!(
                "IPADDRESS_METHOD '{}' is not supported. \
                Supported methods: ipv4, ipv6, off",
                other
            ),
        };

        Ok(config)
    }

    fn required_address(&self) -> Result<String> {
        match &self.address {
            Some(address) if !address.is_empty() => Ok(address.clone()),
            _ => anyhow::bail!(
                "IPADDRESS_ADDRESS is required when IPADDRESS_METHOD={}",
                self.method
            ),
        }
    }
}

fn main() -> ExitCode {
    let settings = Settings::from_env();

    let log_level = match settings.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return CtlExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let config = match settings.address_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            return CtlExitCode::ConfigError.into();
        }
    };

    match populate(&config) {
        Ok(record) => {
            info!(
                family = %record.family(),
                prefix_length = record.prefix_length(),
                local = ?record.local(),
                peer = ?record.peer(),
                broadcast = ?record.broadcast(),
                gateway = ?record.gateway(),
                "address record populated"
            );
            CtlExitCode::Success.into()
        }
        Err(e) => {
            error!("Failed to apply address configuration: {:#}", e);
            CtlExitCode::RuntimeError.into()
        }
    }
}

/// Apply `config` to a fresh record
fn populate(config: &AddressConfig) -> Result<IpAddress> {
    let mut record = IpAddress::new(config.family().unwrap_or_default());
    config
        .apply(&mut record)
        .context("address record rejected configuration")?;
    Ok(record)
}
