//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use polytile::TilingError;
    use polytile::io::error::{geometry_error, invalid_input, ring_load_error};
    use std::error::Error;
    use std::path::Path;

    #[test]
    fn test_invalid_input_formatting() {
        let error = invalid_input("stride", &-1.0, &"stride must be positive and finite");
        assert_eq!(
            error.to_string(),
            "Invalid input 'stride' = '-1': stride must be positive and finite"
        );
    }

    #[test]
    fn test_geometry_formatting() {
        let error = geometry_error("ray cast", &"crossing abscissa is not finite");
        assert_eq!(
            error.to_string(),
            "Geometry failure in ray cast: crossing abscissa is not finite"
        );
    }

    #[test]
    fn test_ring_load_formatting() {
        let error = ring_load_error(Path::new("region.json"), &"no coordinate array found");
        assert_eq!(
            error.to_string(),
            "Failed to load ring 'region.json': no coordinate array found"
        );
    }

    #[test]
    fn test_file_system_errors_chain_their_source() {
        let inner = std::io::Error::other("disk unhappy");
        let error: TilingError = inner.into();
        assert!(error.source().is_some());
        assert!(error.to_string().contains("disk unhappy"));
    }

    // Core taxonomy errors carry no source; the fault is the input itself
    #[test]
    fn test_input_errors_have_no_source() {
        let input = invalid_input("ring", &"2 vertices", &"a ring needs at least 3 distinct vertices");
        assert!(input.source().is_none());
        let geometry = geometry_error("within", &"synthetic failure");
        assert!(geometry.source().is_none());
    }
}
