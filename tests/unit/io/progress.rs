//! Tests for progress display plumbing

#[cfg(test)]
mod tests {
    use polytile::algorithm::containment::RayCrossingChecker;
    use polytile::algorithm::tiler::GridTiler;
    use polytile::io::progress::ProgressManager;
    use polytile::spatial::Ring;

    // The bars draw to a hidden terminal under test; what matters is that
    // the observer plumbing survives a full scan
    #[test]
    fn test_scan_progress_observes_a_full_scan() -> polytile::Result<()> {
        let manager = ProgressManager::new();
        let mut scan = manager.start_scan("region.json");

        let ring = Ring::rectangle(0.0, 0.0, 10.0, 10.0)?;
        let tiler = GridTiler::new(RayCrossingChecker::new());
        let result = tiler.tile_with_observer(&ring, 2.5, &mut scan)?;

        assert_eq!(result.accepted(), 9);
        manager.complete_file();
        manager.finish();
        Ok(())
    }

    #[test]
    fn test_batch_initialization_at_both_scales() {
        let mut small = ProgressManager::new();
        small.initialize(2);
        small.finish();

        let mut large = ProgressManager::default();
        large.initialize(50);
        large.complete_file();
        large.finish();
    }
}
