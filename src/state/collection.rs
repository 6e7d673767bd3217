use rand::seq::SliceRandom;
use rand::Rng;

use super::data::{pad2, PhotoRecord};
use crate::config::GalleryConfig;

/// Build the ordered photo list described by the configuration.
///
/// Ids run from 1 to `count` in ascending order and each source path follows
/// the `{photos_dir}/{NN}.{ext}` convention. Nothing on disk is checked here;
/// missing files only show up later as placeholders.
pub fn build_photos(config: &GalleryConfig) -> Vec<PhotoRecord> {
    (1..=config.count)
        .map(|id| PhotoRecord {
            id,
            src: config.photos_dir.join(format!("{}.{}", pad2(id), config.ext)),
            title: format!("Moment {}", pad2(id)),
            subtitle: config.date_label.clone(),
        })
        .collect()
}

/// The working (shuffleable) order plus the frozen order used by reset.
#[derive(Debug, Clone)]
pub struct PhotoCollection {
    working: Vec<PhotoRecord>,
    original: Vec<PhotoRecord>,
}

impl PhotoCollection {
    pub fn new(photos: Vec<PhotoRecord>) -> Self {
        Self {
            original: photos.clone(),
            working: photos,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(build_photos(config))
    }

    /// Photos in display order
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.working
    }

    pub fn get(&self, index: usize) -> Option<&PhotoRecord> {
        self.working.get(index)
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Randomly permute the working order (Fisher–Yates)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.working.shuffle(rng);
    }

    /// Restore the working order to exactly the order it was built in
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(count: u32) -> GalleryConfig {
        GalleryConfig {
            count,
            ..GalleryConfig::default()
        }
    }

    fn ids(photos: &[PhotoRecord]) -> Vec<u32> {
        photos.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_build_naming() {
        let photos = build_photos(&config(12));
        assert_eq!(photos[0].src, std::path::PathBuf::from("photos/01.jpg"));
        assert_eq!(photos[0].title, "Moment 01");
        assert_eq!(photos[9].src, std::path::PathBuf::from("photos/10.jpg"));
        assert_eq!(photos[11].subtitle, "January 21, 2026");
    }

    #[test]
    fn test_build_empty() {
        assert!(build_photos(&config(0)).is_empty());
        assert!(PhotoCollection::from_config(&config(0)).is_empty());
    }

    #[test]
    fn test_custom_dir_and_extension() {
        let cfg = GalleryConfig {
            photos_dir: "assets/pics".into(),
            ext: "webp".to_string(),
            count: 2,
            ..GalleryConfig::default()
        };
        let photos = build_photos(&cfg);
        assert_eq!(photos[1].src, std::path::PathBuf::from("assets/pics/02.webp"));
        assert_eq!(photos[1].file_name(), "02.webp");
    }

    #[test]
    fn test_reset_after_shuffles() {
        let mut collection = PhotoCollection::from_config(&config(36));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            collection.shuffle(&mut rng);
        }
        collection.reset();
        assert_eq!(ids(collection.photos()), (1..=36).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn build_yields_ascending_ids(count in 0u32..200) {
            let photos = build_photos(&config(count));
            prop_assert_eq!(photos.len(), count as usize);
            prop_assert_eq!(ids(&photos), (1..=count).collect::<Vec<_>>());
        }

        #[test]
        fn shuffle_is_a_permutation(count in 0u32..80, seed in any::<u64>()) {
            let mut collection = PhotoCollection::from_config(&config(count));
            let mut rng = StdRng::seed_from_u64(seed);
            collection.shuffle(&mut rng);

            let mut shuffled = ids(collection.photos());
            shuffled.sort_unstable();
            prop_assert_eq!(shuffled, (1..=count).collect::<Vec<_>>());
        }

        #[test]
        fn reset_restores_build_order(count in 1u32..60, seeds in prop::collection::vec(any::<u64>(), 0..6)) {
            let mut collection = PhotoCollection::from_config(&config(count));
            for seed in seeds {
                collection.shuffle(&mut StdRng::seed_from_u64(seed));
            }
            collection.reset();
            let expected = build_photos(&config(count));
            prop_assert_eq!(collection.photos(), expected.as_slice());
        }
    }
}
