//! `taas emulator` - manage emulator pods on the device hub

use clap::Subcommand;

use taas_core::Resource;

use crate::commands::{require_identity, PortalSession};
use crate::output::{print_list, print_message, print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum EmulatorCommands {
    /// List your emulator pods
    List,

    /// Request a new emulator pod
    Create {
        /// Guest operating system
        #[arg(long, default_value = "android")]
        os: String,

        /// OS version, e.g. "13"
        #[arg(long)]
        version: String,
    },

    /// Delete an emulator pod by name
    Delete {
        /// Pod name as shown by `taas emulator list`
        pod: String,
    },

    /// Show the remote viewer link and adb target for a pod
    Viewer {
        /// Pod name as shown by `taas emulator list`
        pod: String,
    },
}

impl TableDisplay for Resource {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Status", "Available", "Version", "ADB Port", "VNC Port"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.status.clone(),
            self.available.clone(),
            self.version.clone(),
            self.adb_port.to_string(),
            self.vnc_port.to_string(),
        ]
    }
}

pub async fn execute(
    cmd: EmulatorCommands,
    session: &mut PortalSession,
    format: OutputFormat,
) -> anyhow::Result<()> {
    require_identity(session)?;

    match cmd {
        EmulatorCommands::List => {
            session.list_resources().await?;
            print_list(session.resources(), format);
        }
        EmulatorCommands::Create { os, version } => {
            session.create_resource(&os, &version).await?;
            print_success(&format!("Requested {} {} emulator", os, version));
            print_list(session.resources(), format);
        }
        EmulatorCommands::Delete { pod } => {
            session.delete_resource(&pod).await?;
            print_success(&format!("Deleted {}", pod));
            print_list(session.resources(), format);
        }
        EmulatorCommands::Viewer { pod } => {
            session.list_resources().await?;
            let Some(resource) = session.resources().iter().find(|r| r.name == pod) else {
                anyhow::bail!("no pod named {} (check `taas emulator list`)", pod);
            };
            let viewer = session.remote_viewer_url(resource.vnc_port);
            let adb = session.adb_target(resource.adb_port);
            print_message(&format!("Viewer: {}", viewer), format);
            print_message(&format!("adb:    adb connect {}", adb), format);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_rows_line_up_with_headers() {
        let resource = Resource {
            name: "emulator-qa1-0".into(),
            status: "Running".into(),
            available: "true".into(),
            version: "13".into(),
            adb_port: 30001,
            vnc_port: 30002,
        };
        let row = resource.row();
        assert_eq!(row.len(), Resource::headers().len());
        assert_eq!(row[0], "emulator-qa1-0");
        assert_eq!(row[2], "true");
        assert_eq!(row[4], "30001");
    }
}
