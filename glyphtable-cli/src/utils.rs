use std::error::Error;

/// Describe an error and everything that caused it, one cause per line
pub(crate) fn describe(doing: &str, err: &dyn Error) -> String {
    let mut message = format!("Error {}: {}", doing, err);
    if let Some(cause) = err.source() {
        message.push_str("\nCaused by:");
        for (i, e) in std::iter::successors(Some(cause), |e| (*e).source()).enumerate() {
            message.push_str(&format!("\n   {}: {}", i, e));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphtable::FontFile;

    #[test]
    fn test_describe_walks_causes() {
        let err = match FontFile::open("/definitely/not/here.ttf") {
            Err(e) => e,
            Ok(_) => panic!("opened a file that doesn't exist"),
        };
        let message = describe("reading font", &err);
        assert!(message.starts_with("Error reading font: I/O error on /definitely/not/here.ttf"));
        assert!(message.contains("Caused by:\n   0: "));
    }
}
