use crate::models::filesystem::FilesystemSet;
use crate::util::human::fmt_kb;

/// Generate a human-readable filesystem inventory to a String.
pub fn generate(set: &FilesystemSet) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════\n");
    out.push_str(&format!("  fsinv Filesystem Inventory — {}\n", now));
    out.push_str("═══════════════════════════════════════════════\n\n");

    if set.is_empty() {
        out.push_str("  No filesystems found.\n\n");
        out.push_str("═══════════════════════════════════════════════\n");
        return out;
    }

    // ── Mounted filesystems ────────────────────────────────────────────
    let (mounted, unmounted): (Vec<_>, Vec<_>) = set.iter().partition(|(_, r)| r.mount.is_some());

    out.push_str(&format!("── Mounted ({}) ─────────────────────────────────\n", mounted.len()));
    out.push_str(&format!(
        "  {:<32} {:<20} {:<10} {:>10} {:>10} {:>10} {:>5}\n",
        "Device", "Mount", "Type", "Size", "Used", "Avail", "Use%"
    ));
    out.push_str(&format!("  {}\n", "─".repeat(103)));
    for (device, rec) in &mounted {
        out.push_str(&format!(
            "  {:<32} {:<20} {:<10} {:>10} {:>10} {:>10} {:>5}\n",
            device,
            rec.mount.as_deref().unwrap_or("—"),
            rec.fs_type.as_deref().unwrap_or("—"),
            fmt_kb(rec.size_kb()),
            fmt_kb(rec.used_kb()),
            fmt_kb(rec.available_kb()),
            rec.percent_used.as_deref().unwrap_or("—"),
        ));
        if let Some(opts) = &rec.mount_options {
            out.push_str(&format!("      options: {}\n", opts.join(",")));
        }
        push_identity(&mut out, rec.uuid.as_deref(), rec.label.as_deref());
    }
    out.push('\n');

    // ── Block devices seen only by lsblk/blkid ─────────────────────────
    if !unmounted.is_empty() {
        out.push_str(&format!("── Not mounted ({}) ─────────────────────────────\n", unmounted.len()));
        for (device, rec) in &unmounted {
            out.push_str(&format!(
                "  {:<32} {:<10}\n",
                device,
                rec.fs_type.as_deref().unwrap_or("—"),
            ));
            push_identity(&mut out, rec.uuid.as_deref(), rec.label.as_deref());
        }
        out.push('\n');
    }

    out.push_str("═══════════════════════════════════════════════\n");
    out
}

fn push_identity(out: &mut String, uuid: Option<&str>, label: Option<&str>) {
    match (uuid, label) {
        (None, None) => {}
        (uuid, label) => out.push_str(&format!(
            "      uuid: {}  label: {}\n",
            uuid.unwrap_or("—"),
            label.unwrap_or("—"),
        )),
    }
}
