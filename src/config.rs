//! Device configuration, read from the command line or the driver's environment.

use clap::Args;

use crate::device_control::FrontendClient;

/// The MythTV frontend this driver controls
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Hostname or IP address of the frontend
    #[arg(long, env = "INTG_MYTHTV_HOST", default_value = "localhost")]
    pub host: String,

    /// Friendly name of the frontend, also used as the entity id (defaults to the host)
    #[arg(long, env = "INTG_MYTHTV_NAME")]
    pub name: Option<String>,

    /// Port of the Frontend service API
    #[arg(long, env = "INTG_MYTHTV_PORT", default_value_t = FrontendClient::DEFAULT_PORT)]
    pub port: u16,
}

impl DeviceConfig {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.host)
    }

    pub fn id(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        device: DeviceConfig,
    }

    #[test]
    fn test_name_defaults_to_host() {
        let config = DeviceConfig {
            host: "mythfe".into(),
            name: None,
            port: 6547,
        };
        assert_eq!(config.name(), "mythfe");
        assert_eq!(config.id(), "mythfe");
    }

    #[test]
    fn test_explicit_name() {
        let cli = TestCli::try_parse_from([
            "test",
            "--host",
            "192.168.1.20",
            "--name",
            "Lounge",
            "--port",
            "6548",
        ])
        .unwrap();

        assert_eq!(cli.device.host, "192.168.1.20");
        assert_eq!(cli.device.name(), "Lounge");
        assert_eq!(cli.device.id(), "Lounge");
        assert_eq!(cli.device.port, 6548);
    }

    #[test]
    fn test_invalid_port() {
        assert!(TestCli::try_parse_from(["test", "--port", "http"]).is_err());
    }
}
