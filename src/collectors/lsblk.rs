use crate::collectors::identity::IdentityAttr;
use crate::collectors::runner::Cmd;
use std::borrow::Cow;
use std::path::Path;

/// Where lsblk is probed for unless the config names another path.
pub const DEFAULT_LSBLK: &str = "/bin/lsblk";

/// `lsblk -r -o NAME,<COLUMN> -n`: raw, headerless, one device per line.
///
/// Found at the default location, lsblk runs from PATH as plain `lsblk`.
/// A configured path runs as given.
pub fn lsblk_cmd(lsblk: &Path, attr: IdentityAttr) -> Cmd {
    let program: Cow<'_, str> = if lsblk == Path::new(DEFAULT_LSBLK) {
        Cow::Borrowed("lsblk")
    } else {
        lsblk.to_string_lossy()
    };
    let columns = format!("NAME,{}", attr.lsblk_column());
    Cmd::new(program).args(["-r", "-o", columns.as_str(), "-n"])
}

/// Split `<bare-name> <value>` on the first whitespace run.
///
/// Devices without the attribute print just the name; those yield `None`.
/// Raw mode hex-escapes unsafe characters (`\x20` for space), which are
/// decoded in both halves.
pub fn parse_lsblk_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_end();
    let (name, value) = line.split_once(char::is_whitespace)?;
    let value = value.trim_start();
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((unescape_hex(name), unescape_hex(value)))
}

fn unescape_hex(s: &str) -> String {
    if !s.contains("\\x") {
        return s.to_string();
    }
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'x') {
            let decoded = s.get(i + 2..i + 4).and_then(|h| u8::from_str_radix(h, 16).ok());
            if let Some(b) = decoded {
                out.push(b);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
