// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host implementation of the build environment: port resolution, serial
//! port enumeration and uploader process execution.

use std::env::{self, VarError};
use std::path::Path;
use std::process::Command;

use serialport::SerialPortType;

use nina_cert_common::detect::{select_board_port, PortCandidate};
use nina_cert_common::{BuildEnv, ProjectConfig, ToolFailure, UploaderCommand};
use nina_cert_common::{UPLOADER_TOOL, UPLOAD_PORT_KEY};

/// Where the upload port came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortSource {
    CommandLine,
    Environment,
    ConfigFile,
    Detected,
}

/// Build environment backed by the real host.
pub struct HostEnv {
    port: Option<String>,
    uploader: String,
}

impl HostEnv {
    /// Resolve the port and uploader from CLI flags, `UPLOAD_PORT` and the
    /// project configuration.
    pub fn from_sources(
        cli_port: Option<&str>,
        cli_uploader: Option<&Path>,
        config: &ProjectConfig,
        detect: bool,
    ) -> Self {
        let env_port = port_from_var(env::var(UPLOAD_PORT_KEY));
        let port = resolve_port(cli_port, env_port.as_deref(), config.upload_port(), || {
            detect_port(detect, enumerate_ports)
        });

        let port = match port {
            Some((port, source)) => {
                log::debug!("upload port {} ({:?})", port, source);
                Some(port)
            }
            None => {
                log::debug!("no upload port configured");
                None
            }
        };

        let uploader = choose_uploader(cli_uploader, config.uploader.as_deref());

        Self { port, uploader }
    }
}

impl BuildEnv for HostEnv {
    fn upload_port(&self) -> Option<String> {
        self.port.clone()
    }

    fn execute(&mut self, cmd: &UploaderCommand) -> Result<i32, ToolFailure> {
        let program = which::which(&cmd.program)
            .map_err(|_| ToolFailure::NotFound(cmd.program.clone()))?;
        log::debug!("uploader resolved to {}", program.display());

        let status = Command::new(&program).args(&cmd.args).status()?;
        log::debug!("uploader exited: {}", status);

        match status.code() {
            Some(0) => Ok(0),
            Some(code) => Err(ToolFailure::Exit(code)),
            None => Err(ToolFailure::Signal),
        }
    }

    fn uploader(&self) -> String {
        self.uploader.clone()
    }
}

/// Pick the first non-empty port in precedence order. `detect` is only
/// called when nothing is configured.
pub fn resolve_port(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
    detect: impl FnOnce() -> Option<String>,
) -> Option<(String, PortSource)> {
    let configured = [
        (cli, PortSource::CommandLine),
        (env, PortSource::Environment),
        (config, PortSource::ConfigFile),
    ];

    configured
        .into_iter()
        .find_map(|(port, source)| {
            port.filter(|p| !p.is_empty())
                .map(|p| (p.to_string(), source))
        })
        .or_else(|| {
            detect()
                .filter(|p| !p.is_empty())
                .map(|p| (p, PortSource::Detected))
        })
}

/// Value of `UPLOAD_PORT`. A value that is not valid UTF-8 counts as unset.
pub fn port_from_var(var: Result<String, VarError>) -> Option<String> {
    match var {
        Ok(port) => Some(port),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            log::warn!("ignoring {} {:?}: not valid UTF-8", UPLOAD_PORT_KEY, raw);
            None
        }
    }
}

/// Port of the attached board, only when detection was asked for.
pub fn detect_port(
    detect: bool,
    enumerate: impl FnOnce() -> serialport::Result<Vec<PortCandidate>>,
) -> Option<String> {
    if !detect {
        return None;
    }
    match enumerate() {
        Ok(ports) => select_board_port(&ports).map(|p| p.name.clone()),
        Err(e) => {
            log::warn!("port detection failed: {}", e);
            None
        }
    }
}

/// `--uploader`, then the configured uploader, then `arduino-fwuploader`.
pub fn choose_uploader(cli: Option<&Path>, config: Option<&Path>) -> String {
    cli.or(config)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| UPLOADER_TOOL.to_string())
}

/// Enumerate serial ports as host-independent candidates.
pub fn enumerate_ports() -> serialport::Result<Vec<PortCandidate>> {
    let ports = serialport::available_ports()?;
    Ok(ports
        .into_iter()
        .map(|info| match info.port_type {
            SerialPortType::UsbPort(usb) => PortCandidate {
                name: info.port_name,
                vid: Some(usb.vid),
                pid: Some(usb.pid),
                product: usb.product,
            },
            _ => PortCandidate {
                name: info.port_name,
                ..Default::default()
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nina_cert_common::detect::ARDUINO_VID;

    fn no_detect() -> Option<String> {
        None
    }

    fn board(name: &str) -> PortCandidate {
        PortCandidate {
            name: name.into(),
            vid: Some(ARDUINO_VID),
            pid: Some(0x8054),
            product: None,
        }
    }

    fn host_env(uploader: &str) -> HostEnv {
        HostEnv {
            port: Some("COM3".into()),
            uploader: uploader.into(),
        }
    }

    #[test]
    fn test_cli_port_wins() {
        assert_eq!(
            resolve_port(Some("COM3"), Some("COM4"), Some("COM5"), no_detect),
            Some(("COM3".to_string(), PortSource::CommandLine))
        );
    }

    #[test]
    fn test_env_before_config() {
        assert_eq!(
            resolve_port(None, Some("COM4"), Some("COM5"), no_detect),
            Some(("COM4".to_string(), PortSource::Environment))
        );
    }

    #[test]
    fn test_empty_values_are_skipped() {
        assert_eq!(
            resolve_port(Some(""), Some(""), Some("COM5"), no_detect),
            Some(("COM5".to_string(), PortSource::ConfigFile))
        );
    }

    #[test]
    fn test_detection_is_last_resort() {
        assert_eq!(
            resolve_port(None, None, None, || Some("/dev/ttyACM0".into())),
            Some(("/dev/ttyACM0".to_string(), PortSource::Detected))
        );
        assert_eq!(
            resolve_port(Some("COM3"), None, None, || panic!("detection must not run")),
            Some(("COM3".to_string(), PortSource::CommandLine))
        );
    }

    #[test]
    fn test_nothing_configured() {
        assert_eq!(resolve_port(None, Some(""), None, no_detect), None);
    }

    #[test]
    fn test_missing_uploader_is_not_found() {
        let mut env = HostEnv {
            port: Some("COM3".into()),
            uploader: "nina-cert-upload-test-missing-tool".into(),
        };
        let cmd = UploaderCommand::certificate_flash(&env.uploader(), "COM3");
        assert!(matches!(env.execute(&cmd), Err(ToolFailure::NotFound(_))));
    }

    // =========================================================================
    // Environment variable
    // =========================================================================

    #[test]
    fn test_port_from_var() {
        assert_eq!(port_from_var(Ok("COM3".into())), Some("COM3".to_string()));
        assert_eq!(port_from_var(Err(VarError::NotPresent)), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_port_is_unset() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'C', b'O', b'M', 0xff]);
        assert_eq!(port_from_var(Err(VarError::NotUnicode(raw))), None);
    }

    // =========================================================================
    // Detection gate
    // =========================================================================

    #[test]
    fn test_detection_disabled_does_not_enumerate() {
        assert_eq!(
            detect_port(false, || panic!("ports must not be enumerated")),
            None
        );
    }

    #[test]
    fn test_detection_enabled_picks_board() {
        let ports = vec![
            PortCandidate {
                name: "/dev/ttyS0".into(),
                ..Default::default()
            },
            board("/dev/ttyACM0"),
        ];
        assert_eq!(
            detect_port(true, || Ok(ports)),
            Some("/dev/ttyACM0".to_string())
        );
    }

    #[test]
    fn test_detection_ambiguous_or_failing() {
        assert_eq!(
            detect_port(true, || Ok(vec![board("COM3"), board("COM4")])),
            None
        );
        assert_eq!(
            detect_port(true, || Err(serialport::Error::new(
                serialport::ErrorKind::NoDevice,
                "no ports"
            ))),
            None
        );
    }

    // =========================================================================
    // Uploader choice
    // =========================================================================

    #[test]
    fn test_uploader_precedence() {
        let cli = Path::new("/usr/local/bin/fwuploader");
        let config = Path::new("/opt/arduino/arduino-fwuploader");

        assert_eq!(choose_uploader(Some(cli), Some(config)), "/usr/local/bin/fwuploader");
        assert_eq!(
            choose_uploader(None, Some(config)),
            "/opt/arduino/arduino-fwuploader"
        );
        assert_eq!(choose_uploader(None, None), "arduino-fwuploader");
    }

    // =========================================================================
    // Process execution
    // =========================================================================

    #[cfg(unix)]
    #[test]
    fn test_successful_uploader_returns_zero() {
        let mut env = host_env("true");
        let cmd = UploaderCommand::certificate_flash(&env.uploader(), "COM3");
        assert_eq!(env.execute(&cmd).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_uploader_reports_exit_code() {
        let mut env = host_env("false");
        let cmd = UploaderCommand::certificate_flash(&env.uploader(), "COM3");
        assert!(matches!(env.execute(&cmd), Err(ToolFailure::Exit(1))));
    }

    #[cfg(unix)]
    #[test]
    fn test_killed_uploader_reports_signal() {
        let mut env = host_env("sh");
        let cmd = UploaderCommand {
            program: "sh".into(),
            args: vec!["-c".into(), "kill -9 $$".into()],
        };
        assert!(matches!(env.execute(&cmd), Err(ToolFailure::Signal)));
    }
}
