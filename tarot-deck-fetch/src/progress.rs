/// Progress update sent during a reference-deck fetch.
///
/// Updates flow over an MPSC channel so a frontend can drive a progress
/// bar from its own thread while the download runs on a worker.
#[derive(Debug, Clone)]
pub enum FetchProgress {
    /// The HTTP response arrived and streaming is about to begin
    Started {
        /// Archive size from Content-Length, when the server reports one
        total_bytes: Option<u64>,
    },

    /// Archive bytes are being streamed to disk
    Downloading {
        bytes_read: u64,
        total_bytes: Option<u64>,
    },

    /// Download finished; the archive is being unpacked
    Extracting,

    /// The deck is fully extracted and the archive removed
    Completed,

    /// The fetch failed; the caller may retry
    Failed { message: String },
}

impl FetchProgress {
    pub fn started(total_bytes: Option<u64>) -> Self {
        Self::Started { total_bytes }
    }

    pub fn downloading(bytes_read: u64, total_bytes: Option<u64>) -> Self {
        Self::Downloading {
            bytes_read,
            total_bytes,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Returns the progress fraction (0.0 to 1.0) if calculable.
    pub fn percentage(&self) -> Option<f64> {
        match self {
            Self::Downloading {
                bytes_read,
                total_bytes: Some(total),
            } if *total > 0 => Some(*bytes_read as f64 / *total as f64),
            Self::Completed => Some(1.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_needs_a_known_total() {
        assert!(FetchProgress::downloading(10, None).percentage().is_none());
        assert_eq!(
            FetchProgress::downloading(50, Some(200)).percentage(),
            Some(0.25)
        );
        assert_eq!(FetchProgress::Completed.percentage(), Some(1.0));
        assert!(FetchProgress::Extracting.percentage().is_none());
    }
}
