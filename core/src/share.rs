use crate::notice::Notice;

/// Outcome of an async clipboard write. Exactly one notice per resolved
/// call; a continuation that finds the widget unmounted owes nothing.
pub fn clipboard_settled(mounted: bool, ok: bool) -> Option<Notice> {
    if !mounted {
        return None;
    }
    Some(if ok {
        Notice::LinkCopied
    } else {
        Notice::CopyFailed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_write_yields_one_copied_notice() {
        assert_eq!(clipboard_settled(true, true), Some(Notice::LinkCopied));
    }

    #[test]
    fn rejected_write_yields_one_failure_notice() {
        assert_eq!(clipboard_settled(true, false), Some(Notice::CopyFailed));
    }

    #[test]
    fn settle_after_unmount_is_dropped() {
        assert_eq!(clipboard_settled(false, true), None);
        assert_eq!(clipboard_settled(false, false), None);
    }
}
