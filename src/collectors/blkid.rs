use crate::collectors::identity::IdentityAttr;
use crate::collectors::runner::Cmd;

/// `blkid -s <TAG>`: one `<device>: TAG="<value>"` line per device.
pub fn blkid_cmd(attr: IdentityAttr) -> Cmd {
    Cmd::new("blkid").args(["-s", attr.blkid_tag()])
}

/// Parse `/dev/md0: LABEL="/boot" ` into `("/dev/md0", "/boot")`.
///
/// The device path is already absolute, so no lookup is needed. Lines for a
/// different tag, or without the quoted value, yield `None`.
pub fn parse_blkid_line(line: &str, attr: IdentityAttr) -> Option<(&str, &str)> {
    let marker = format!(": {}=\"", attr.blkid_tag());
    let at = line.find(&marker)?;
    let device = line[..at].trim();
    let value = line[at + marker.len()..].trim_end().strip_suffix('"')?;
    if device.is_empty() {
        return None;
    }
    Some((device, value))
}
