// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pest "diagnosis" simulator.
//!
//! No image is analysed. After a fixed delay one pest is picked uniformly at
//! random from the catalog and presented as the diagnosis. The image bytes
//! are kept only so the frontend can show what was submitted.

use crate::schedule::{ScheduledTask, TaskState};
use crate::types::PestEntry;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnosis {
    Detected(PestEntry),
    /// Only when the catalog has no pests at all.
    NoIssues,
}

/// Image container guessed from the leading bytes. Display only; any
/// content is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Webp,
    Unknown,
}

impl ImageKind {
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            ImageKind::Png
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            ImageKind::Jpeg
        } else if bytes.starts_with(b"GIF8") {
            ImageKind::Gif
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            ImageKind::Webp
        } else {
            ImageKind::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageKind::Png => "PNG",
            ImageKind::Jpeg => "JPEG",
            ImageKind::Gif => "GIF",
            ImageKind::Webp => "WebP",
            ImageKind::Unknown => "image",
        }
    }
}

/// Uniform pick over the pest catalog.
pub fn pick_diagnosis<R: Rng + ?Sized>(pests: &[PestEntry], rng: &mut R) -> Diagnosis {
    pests
        .choose(rng)
        .cloned()
        .map(Diagnosis::Detected)
        .unwrap_or(Diagnosis::NoIssues)
}

/// One submitted image and its pending or finished analysis.
#[derive(Debug, Clone)]
pub struct PestScan {
    name: String,
    image: Vec<u8>,
    task: ScheduledTask<Diagnosis>,
}

impl PestScan {
    pub fn submit(name: impl Into<String>, image: Vec<u8>, now: Instant, delay: Duration) -> Self {
        let name = name.into();
        tracing::debug!(%name, bytes = image.len(), ?delay, "image submitted for analysis");
        Self {
            name,
            image,
            task: ScheduledTask::start(now, delay),
        }
    }

    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, pests: &[PestEntry], rng: &mut R) -> bool {
        let resolved = self.task.poll(now, || pick_diagnosis(pests, rng));
        if resolved {
            if let Some(Diagnosis::Detected(pest)) = self.task.result() {
                tracing::debug!(pest = %pest.name, "analysis finished");
            }
        }
        resolved
    }

    pub fn cancel(&mut self) {
        if self.task.cancel() {
            tracing::debug!(name = %self.name, "analysis canceled");
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn kind(&self) -> ImageKind {
        ImageKind::sniff(&self.image)
    }

    pub fn state(&self) -> &TaskState<Diagnosis> {
        self.task.state()
    }

    pub fn progress(&self, now: Instant) -> f32 {
        self.task.progress(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pick_is_reproducible_for_a_seed() {
        let catalog = Catalog::sample();
        let a = pick_diagnosis(&catalog.pests, &mut StdRng::seed_from_u64(9));
        let b = pick_diagnosis(&catalog.pests, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(matches!(a, Diagnosis::Detected(_)));
    }

    #[test]
    fn every_pest_can_be_picked() {
        let catalog = Catalog::sample();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            if let Diagnosis::Detected(pest) = pick_diagnosis(&catalog.pests, &mut rng) {
                seen.insert(pest.name);
            }
        }
        assert_eq!(seen.len(), catalog.pests.len());
    }

    #[test]
    fn empty_catalog_means_no_issues() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_diagnosis(&[], &mut rng), Diagnosis::NoIssues);
    }

    #[test]
    fn scan_waits_for_delay() {
        let catalog = Catalog::sample();
        let mut rng = StdRng::seed_from_u64(3);
        let start = Instant::now();
        let mut scan = PestScan::submit("leaf.png", vec![0x89, b'P', b'N', b'G'], start, Duration::from_secs(3));
        assert_eq!(scan.kind(), ImageKind::Png);
        assert!(!scan.poll(start + Duration::from_secs(1), &catalog.pests, &mut rng));
        assert_eq!(scan.state(), &TaskState::Pending);
        assert!(scan.poll(start + Duration::from_secs(3), &catalog.pests, &mut rng));
        assert!(matches!(scan.state(), TaskState::Resolved(Diagnosis::Detected(_))));
    }

    #[test]
    fn sniff_recognises_common_formats() {
        assert_eq!(ImageKind::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageKind::Jpeg);
        assert_eq!(ImageKind::sniff(b"GIF89a"), ImageKind::Gif);
        assert_eq!(ImageKind::sniff(b"RIFF\0\0\0\0WEBPVP8 "), ImageKind::Webp);
        assert_eq!(ImageKind::sniff(b"hello"), ImageKind::Unknown);
    }
}
