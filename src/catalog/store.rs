//! Immutable in-memory catalog.

use thiserror::Error;

use crate::catalog::site::Site;

/// Errors produced by catalog construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No site carries the requested id.
    #[error("Site not found")]
    NotFound,

    /// Site ids must be positive.
    #[error("site id must be positive (found {0})")]
    NonPositiveId(u64),

    /// Two sites share an id.
    #[error("duplicate site id {0}")]
    DuplicateId(u64),
}

/// Ordered, read-only set of sites.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sites: Vec<Site>,
}

impl Catalog {
    /// Build a catalog, rejecting zero or repeated ids.
    pub fn new(sites: Vec<Site>) -> Result<Self, CatalogError> {
        Self::check_ids(&sites)?;
        Ok(Self { sites })
    }

    /// Reports the first zero or repeated id in `sites`.
    pub fn check_ids(sites: &[Site]) -> Result<(), CatalogError> {
        for (i, site) in sites.iter().enumerate() {
            if site.id == 0 {
                return Err(CatalogError::NonPositiveId(site.id));
            }
            if sites[..i].iter().any(|earlier| earlier.id == site.id) {
                return Err(CatalogError::DuplicateId(site.id));
            }
        }
        Ok(())
    }

    /// Every site, in insertion order.
    pub fn list_all(&self) -> &[Site] {
        &self.sites
    }

    /// Look up a site by id.
    pub fn get_by_id(&self, id: u64) -> Result<&Site, CatalogError> {
        self.sites
            .iter()
            .find(|site| site.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::site::default_sites;

    fn site(id: u64) -> Site {
        Site {
            id,
            url: format!("http://example.com/{}", id),
            title: format!("Site {}", id),
            description: String::new(),
            category: "projects".to_string(),
        }
    }

    #[test]
    fn test_list_all_preserves_order() {
        let catalog = Catalog::new(vec![site(7), site(3), site(5)]).unwrap();
        let ids: Vec<u64> = catalog.list_all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.list_all().is_empty());
        assert!(catalog.is_empty());
        assert_eq!(catalog.get_by_id(1), Err(CatalogError::NotFound));
    }

    #[test]
    fn test_get_by_id_every_default_site() {
        let sites = default_sites();
        let catalog = Catalog::new(sites.clone()).unwrap();
        for expected in &sites {
            assert_eq!(catalog.get_by_id(expected.id).unwrap(), expected);
        }
        assert_eq!(catalog.get_by_id(999), Err(CatalogError::NotFound));
        assert_eq!(catalog.get_by_id(0), Err(CatalogError::NotFound));
    }

    #[test]
    fn test_default_site_two_is_video_demo() {
        let catalog = Catalog::new(default_sites()).unwrap();
        let video = catalog.get_by_id(2).unwrap();
        assert_eq!(video.title, "Video Demo");
        assert_eq!(video.category, "projects");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_rejects_bad_ids() {
        assert_eq!(
            Catalog::new(vec![site(1), site(2), site(1)]).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
        assert_eq!(
            Catalog::new(vec![site(0)]).unwrap_err(),
            CatalogError::NonPositiveId(0)
        );
    }

    #[test]
    fn test_check_ids_without_building() {
        assert_eq!(Catalog::check_ids(&default_sites()), Ok(()));
        assert_eq!(
            Catalog::check_ids(&[site(4), site(4)]),
            Err(CatalogError::DuplicateId(4))
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(CatalogError::NotFound.to_string(), "Site not found");
    }
}
