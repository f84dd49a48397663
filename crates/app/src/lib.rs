pub mod app_loop;
pub mod save_file;
pub mod seed;

use night_core::{MusicBoxAlert, NightOutcome};

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `NightOutcome` to its reason code string.
pub fn outcome_code(outcome: &NightOutcome) -> &'static str {
    match outcome {
        NightOutcome::Survived => "WIN_SIX_AM",
        NightOutcome::Killed(agent) if agent.breaches_unconditionally() => "LOSS_UNCHECKED",
        NightOutcome::Killed(_) => "LOSS_CHECK_FAILED",
    }
}

/// Line shown under GAME OVER or 6 AM: reason code and state hash, enough to
/// match a report against a replayed journal.
pub fn end_card(outcome: &NightOutcome, snapshot_hash: u64) -> String {
    format!("{}  {}", outcome_code(outcome), format_snapshot_hash(snapshot_hash))
}

pub fn report_label(remaining_s: u64) -> String {
    if remaining_s == 0 {
        return "4  Send report".to_string();
    }
    format!("4  Send report (in {}:{:02})", remaining_s / 60, remaining_s % 60)
}

/// 12 AM, 1 AM, ... as shown in the corner of the office.
pub fn format_hour(hour: u8) -> String {
    format!("{hour} AM")
}

pub fn alert_label(alert: MusicBoxAlert) -> Option<&'static str> {
    match alert {
        MusicBoxAlert::None => None,
        MusicBoxAlert::Warning => Some("!"),
        MusicBoxAlert::Critical => Some("!!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use night_core::AgentId;

    #[test]
    fn format_seed_is_exact_decimal() {
        assert_eq!(format_seed(0), "0");
        assert_eq!(format_seed(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn format_snapshot_hash_is_16_hex_digits() {
        assert_eq!(format_snapshot_hash(0), "0x0000000000000000");
        assert_eq!(format_snapshot_hash(0xDEADBEEF), "0x00000000deadbeef");
    }

    #[test]
    fn outcome_codes_separate_unchecked_kills() {
        assert_eq!(outcome_code(&NightOutcome::Survived), "WIN_SIX_AM");
        assert_eq!(outcome_code(&NightOutcome::Killed(AgentId::Puppet)), "LOSS_UNCHECKED");
        assert_eq!(outcome_code(&NightOutcome::Killed(AgentId::ToyChica)), "LOSS_CHECK_FAILED");
    }

    #[test]
    fn end_card_pairs_reason_with_hash() {
        assert_eq!(
            end_card(&NightOutcome::Killed(AgentId::WitheredFoxy), 0xABC),
            "LOSS_UNCHECKED  0x0000000000000abc"
        );
    }

    #[test]
    fn report_label_counts_down_in_minutes() {
        assert_eq!(report_label(0), "4  Send report");
        assert_eq!(report_label(600), "4  Send report (in 10:00)");
        assert_eq!(report_label(65), "4  Send report (in 1:05)");
    }

    #[test]
    fn hour_and_alert_labels() {
        assert_eq!(format_hour(12), "12 AM");
        assert_eq!(alert_label(MusicBoxAlert::Critical), Some("!!"));
        assert_eq!(alert_label(MusicBoxAlert::None), None);
    }
}
