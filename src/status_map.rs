//! Numeric severity for the cluster health status.
//!
//! A cluster reports its health as `green`, `yellow` or `red`.
//! To make the status usable as a number, it is mapped to:
//! - green: 0
//! - yellow: 1
//! - red: 2
//! - anything else: 3
//!
pub fn status_map(
    status: &str,
) -> u8
{
    match status {
        "green" => 0,
        "yellow" => 1,
        "red" => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_status_map_known_states() {
        assert_eq!(status_map("green"), 0);
        assert_eq!(status_map("yellow"), 1);
        assert_eq!(status_map("red"), 2);
    }

    #[test]
    fn unit_status_map_unknown_states() {
        assert_eq!(status_map("unknown"), 3);
        assert_eq!(status_map(""), 3);
        // case sensitive
        assert_eq!(status_map("GREEN"), 3);
    }
}
