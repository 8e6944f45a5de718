use std::path::Path;

use super::{error::*, placeholder::*, render::*, sink::*};

/// Renders and writes each entry in order, stopping at the first failure.
///
/// `on_written` is called after every successful write with the entry and
/// the path the sink reported. Files written before a failure are left
/// in place. Returns the number of images written.
pub fn generate<'a, S: ImageSink>(
    entries: impl IntoIterator<Item = &'a PlaceholderEntry>,
    cfg: &RenderConfig,
    sink: &mut S,
    mut on_written: impl FnMut(&PlaceholderEntry, &Path),
) -> Result<usize, PlaceholderError> {
    let mut count = 0;

    for entry in entries {
        let before = std::time::Instant::now();

        let img = render(entry, cfg).to_rgb8()?;
        let path = sink.write(&entry.filename, &img)?;

        log::debug!(
            "{} ({}, {} -> {}) took {} ms",
            entry.filename, entry.label, entry.start, entry.end,
            before.elapsed().as_millis()
        );

        on_written(entry, &path);
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_entry_in_order() {
        let entries = dish_placeholders().unwrap();
        let mut sink = MemorySink::new();
        let mut seen = Vec::new();

        let n = generate(&entries, &RenderConfig::default(), &mut sink, |e, _| {
            seen.push(e.filename.clone())
        }).unwrap();

        assert_eq!(n, 7);
        let names: Vec<_> = sink.images.iter().map(|(name, _)| name.clone()).collect();
        let expected: Vec<_> = DISHES.iter().map(|d| d.filename.to_string()).collect();
        assert_eq!(names, expected);
        assert_eq!(seen, expected);
        assert!(sink.images.iter().all(|(_, img)| img.dimensions() == (300, 300)));
    }

    #[test]
    fn memory_sink_holds_gradient() {
        let entries = dish_placeholders().unwrap();
        let mut sink = MemorySink::new();
        generate(&entries[..1], &RenderConfig::default(), &mut sink, |_, _| ()).unwrap();

        let img = sink.get("Placeholder M.png").unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [212, 165, 116]);
        assert_eq!(img.get_pixel(299, 150).0, [176, 138, 94]);
    }

    struct FailAfter(usize, MemorySink);

    impl ImageSink for FailAfter {
        fn write(&mut self, filename: &str, img: &image::RgbImage) -> Result<std::path::PathBuf, PlaceholderError> {
            if self.1.images.len() == self.0 {
                let full = std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full");
                return Err(image::ImageError::IoError(full).into())
            }
            self.1.write(filename, img)
        }
    }

    #[test]
    fn stops_at_first_failure() {
        let entries = dish_placeholders().unwrap();
        let mut sink = FailAfter(2, MemorySink::new());
        let mut written = 0;

        let res = generate(&entries, &RenderConfig::default(), &mut sink, |_, _| written += 1);

        assert!(matches!(res, Err(PlaceholderError::ImageSaveError(_))));
        assert_eq!(written, 2);
        assert_eq!(sink.1.images.len(), 2);
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut sink = MemorySink::new();
        let entries: Vec<PlaceholderEntry> = Vec::new();
        let n = generate(&entries, &RenderConfig::default(), &mut sink, |_, _| ()).unwrap();
        assert_eq!(n, 0);
        assert!(sink.images.is_empty());
    }
}
