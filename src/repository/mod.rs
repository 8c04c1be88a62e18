//! # Inventory Repository
//!
//! The in-memory `code → Product` mapping, kept in step with a
//! [`FlatFileStore`].
//!
//! ## Persistence
//!
//! The file is read once, in [`InventoryRepository::open`]. After every
//! successful mutation the full mapping is written back, sorted by code.
//! A failed write is logged and swallowed: the in-memory mapping stays
//! authoritative and [`InventoryRepository::is_persisted`] reports `false`
//! until a later write succeeds.
//!
//! ## Single writer
//!
//! Nothing here locks. The repository is meant to be owned by exactly one
//! task (see [`crate::framework::InventoryActor`]). Two processes pointed at
//! the same file will overwrite each other's changes.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::model::{parse_lenient_float, parse_lenient_int, Product, ProductRecord};

#[derive(Debug)]
pub struct InventoryRepository {
    products: IndexMap<String, Product>,
    store: FlatFileStore,
    persisted: bool,
}

impl InventoryRepository {
    /// Opens the repository backed by `path`, loading it if the file exists.
    ///
    /// A missing file is not an error; it is created on the first save.
    /// A file that cannot be read is logged and the repository starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut repository = Self {
            products: IndexMap::new(),
            store: FlatFileStore::new(path),
            persisted: true,
        };
        repository.load();
        repository
    }

    fn load(&mut self) {
        let path = self.store.path().display().to_string();
        match self.store.load() {
            Ok(Some(contents)) => {
                for product in contents.products {
                    self.products.insert(product.code().to_string(), product);
                }
                if contents.skipped > 0 {
                    warn!(%path, skipped = contents.skipped, "Skipped malformed rows");
                }
                info!(%path, size = self.products.len(), "Loaded inventory");
            }
            Ok(None) => info!(%path, "No inventory file yet, starting empty"),
            Err(e) => error!(error = %e, "Failed to load inventory"),
        }
    }

    fn save(&mut self) {
        let mut sorted: Vec<&Product> = self.products.values().collect();
        sorted.sort_by(|a, b| a.code().cmp(b.code()));

        match self.store.save(sorted) {
            Ok(()) => {
                self.persisted = true;
                debug!(size = self.products.len(), "Saved inventory");
            }
            Err(e) => {
                self.persisted = false;
                error!(error = %e, "Failed to save inventory");
            }
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// `false` when the last save failed and the file lags behind memory.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Inserts the product, replacing every field of any product with the same code.
    /// Returns the replaced product.
    pub fn add(&mut self, product: Product) -> Option<Product> {
        let code = product.code().to_string();
        let replaced = self.products.insert(code.clone(), product);
        info!(%code, replaced = replaced.is_some(), size = self.products.len(), "Added");
        self.save();
        replaced
    }

    /// Removes and returns the product stored under `code`.
    pub fn delete(&mut self, code: &str) -> Result<Product, InventoryError> {
        let removed = self
            .products
            .shift_remove(code)
            .ok_or_else(|| InventoryError::NotFound(code.to_string()))?;
        info!(%code, size = self.products.len(), "Deleted");
        self.save();
        Ok(removed)
    }

    /// Products whose code equals the criterion, or whose name or category
    /// contains it. Case-insensitive; the criterion is trimmed first.
    pub fn search(&self, criterion: &str) -> Vec<Product> {
        let criterion = criterion.trim().to_lowercase();
        let found: Vec<Product> = self
            .products
            .values()
            .filter(|p| p.matches(&criterion))
            .cloned()
            .collect();
        debug!(%criterion, found = found.len(), "Search");
        found
    }

    pub fn list(&self) -> Vec<ProductRecord> {
        self.products.values().map(Product::to_record).collect()
    }

    /// Adds a signed delta to the stored quantity and returns the new quantity.
    ///
    /// # Errors
    /// - [`InventoryError::NotFound`] if `code` is absent
    /// - [`InventoryError::ZeroDelta`] if the delta parses to `0` (unparsable input included)
    /// - [`InventoryError::InsufficientStock`] if the result would be negative
    /// - [`InventoryError::QuantityOverflow`] if the result does not fit in an `i64`
    pub fn adjust_quantity(&mut self, code: &str, delta_raw: &str) -> Result<i64, InventoryError> {
        let product = self
            .products
            .get_mut(code)
            .ok_or_else(|| InventoryError::NotFound(code.to_string()))?;

        let delta = parse_lenient_int(delta_raw).value;
        if delta == 0 {
            return Err(InventoryError::ZeroDelta);
        }

        let available = product.quantity();
        let quantity = available
            .checked_add(delta)
            .ok_or(InventoryError::QuantityOverflow { delta, available })?;
        if quantity < 0 {
            return Err(InventoryError::InsufficientStock {
                requested: delta.unsigned_abs(),
                available,
            });
        }

        product.set_quantity(quantity);
        info!(%code, delta, quantity, "Quantity adjusted");
        self.save();
        Ok(quantity)
    }

    /// Replaces the stored price and returns it.
    ///
    /// # Errors
    /// - [`InventoryError::NotFound`] if `code` is absent
    /// - [`InventoryError::InvalidPrice`] if the price parses to zero or less
    pub fn set_price(&mut self, code: &str, new_price_raw: &str) -> Result<f64, InventoryError> {
        let product = self
            .products
            .get_mut(code)
            .ok_or_else(|| InventoryError::NotFound(code.to_string()))?;

        let price = parse_lenient_float(new_price_raw).value;
        if price <= 0.0 {
            return Err(InventoryError::InvalidPrice(price));
        }

        product.set_price(price);
        info!(%code, price, "Price set");
        self.save();
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn widget() -> Product {
        Product::new("A1", "Tools", "Widget", "10", "2.5")
    }

    fn open_in(dir: &TempDir) -> InventoryRepository {
        InventoryRepository::open(dir.path().join("inventory.csv"))
    }

    fn data_rows(repo: &InventoryRepository) -> Vec<String> {
        fs::read_to_string(repo.path())
            .unwrap()
            .lines()
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn missing_file_starts_empty_and_is_created_on_first_save() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        assert!(repo.is_empty());
        assert!(!repo.path().exists());

        repo.add(widget());
        assert!(repo.path().exists());
        assert_eq!(data_rows(&repo), ["A1;Tools;Widget;10;2.500"]);
    }

    #[test]
    fn add_overwrites_every_field() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(widget());

        let replaced = repo.add(Product::new("A1", "Toys", "Gadget", "1", "9"));
        assert_eq!(replaced, Some(widget()));
        let stored = repo.get("A1").unwrap();
        assert_eq!(stored.category(), "Toys");
        assert_eq!(stored.name(), "Gadget");
        assert_eq!(stored.quantity(), 1);
        assert_eq!(stored.price(), 9.0);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn data_rows_are_sorted_by_code() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        for code in ["B2", "A1", "C3"] {
            repo.add(Product::new(code, "Cat", "Item", "1", "1"));
        }

        let codes: Vec<String> = data_rows(&repo)
            .iter()
            .map(|row| row.split(';').next().unwrap().to_string())
            .collect();
        assert_eq!(codes, ["A1", "B2", "C3"]);

        // In memory, insertion order is kept.
        let listed: Vec<String> = repo.list().into_iter().map(|r| r.code).collect();
        assert_eq!(listed, ["B2", "A1", "C3"]);
    }

    #[test]
    fn delete_reports_not_found_without_touching_the_file() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        assert_eq!(repo.delete("nope"), Err(InventoryError::NotFound("nope".into())));
        assert!(!repo.path().exists());

        repo.add(widget());
        assert_eq!(repo.delete("A1"), Ok(widget()));
        assert!(repo.is_empty());
        assert!(data_rows(&repo).is_empty());
    }

    #[test]
    fn search_matches_code_name_and_category() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(widget());
        repo.add(Product::new("B2", "Garden", "Hose", "1", "1"));

        assert_eq!(repo.search("a1"), vec![widget()]);
        assert_eq!(repo.search("  WIDG "), vec![widget()]);
        assert_eq!(repo.search("tool"), vec![widget()]);
        assert!(repo.search("zzz").is_empty());
        assert_eq!(repo.search("").len(), 2, "empty criterion is a substring of everything");
    }

    #[test]
    fn search_keeps_insertion_order() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(Product::new("C3", "Tools", "Saw", "1", "1"));
        repo.add(Product::new("B2", "Garden", "Hose", "1", "1"));
        repo.add(Product::new("A1", "Tools", "Hammer", "1", "1"));

        let codes: Vec<String> = repo
            .search("tools")
            .iter()
            .map(|p| p.code().to_string())
            .collect();
        assert_eq!(codes, ["C3", "A1"]);
    }

    #[test]
    fn adjust_quantity_rejects_zero_delta() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(widget());

        for raw in ["0", "abc", ""] {
            assert_eq!(repo.adjust_quantity("A1", raw), Err(InventoryError::ZeroDelta));
        }
        assert_eq!(repo.get("A1").unwrap().quantity(), 10);
    }

    #[test]
    fn adjust_quantity_enforces_stock_floor() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(widget());

        assert_eq!(
            repo.adjust_quantity("A1", "-11"),
            Err(InventoryError::InsufficientStock { requested: 11, available: 10 })
        );
        assert_eq!(repo.get("A1").unwrap().quantity(), 10);

        assert_eq!(repo.adjust_quantity("A1", "-10"), Ok(0));
        assert_eq!(repo.adjust_quantity("A1", " 4 "), Ok(4));
        assert_eq!(data_rows(&repo), ["A1;Tools;Widget;4;2.500"]);
    }

    #[test]
    fn adjust_quantity_refuses_overflow() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(Product::new("A1", "Tools", "Widget", &i64::MAX.to_string(), "1"));

        assert_eq!(
            repo.adjust_quantity("A1", "1"),
            Err(InventoryError::QuantityOverflow { delta: 1, available: i64::MAX })
        );
        assert_eq!(repo.get("A1").unwrap().quantity(), i64::MAX);
        assert_eq!(repo.adjust_quantity("A1", "-1"), Ok(i64::MAX - 1));
    }

    #[test]
    fn adjust_quantity_with_most_negative_delta() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(widget());

        assert_eq!(
            repo.adjust_quantity("A1", &i64::MIN.to_string()),
            Err(InventoryError::InsufficientStock {
                requested: i64::MIN.unsigned_abs(),
                available: 10,
            })
        );
        assert_eq!(repo.get("A1").unwrap().quantity(), 10);
    }

    #[test]
    fn adjust_quantity_on_missing_code() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        assert!(repo.adjust_quantity("X", "5").unwrap_err().is_not_found());
    }

    #[test]
    fn set_price_rejects_zero_and_negative() {
        let dir = tempdir().unwrap();
        let mut repo = open_in(&dir);
        repo.add(widget());

        assert_eq!(repo.set_price("A1", "0"), Err(InventoryError::InvalidPrice(0.0)));
        assert_eq!(repo.set_price("A1", "-5"), Err(InventoryError::InvalidPrice(-5.0)));
        assert_eq!(repo.set_price("A1", "n/a"), Err(InventoryError::InvalidPrice(0.0)));
        assert_eq!(repo.get("A1").unwrap().price(), 2.5);

        assert_eq!(repo.set_price("A1", "3,75"), Ok(3.75));
        assert_eq!(data_rows(&repo), ["A1;Tools;Widget;10;3.750"]);
        assert!(repo.set_price("B2", "1").unwrap_err().is_not_found());
    }

    #[test]
    fn failed_save_keeps_memory_authoritative() {
        let dir = tempdir().unwrap();
        let mut repo = InventoryRepository::open(dir.path().join("missing/inventory.csv"));

        assert_eq!(repo.add(widget()), None);
        assert!(!repo.is_persisted());
        assert_eq!(repo.adjust_quantity("A1", "5"), Ok(15));
        assert_eq!(repo.get("A1").unwrap().quantity(), 15);

        fs::create_dir(dir.path().join("missing")).unwrap();
        repo.set_price("A1", "4").unwrap();
        assert!(repo.is_persisted());
        assert_eq!(data_rows(&repo), ["A1;Tools;Widget;15;4.000"]);
    }

    #[test]
    fn unreadable_file_starts_empty_and_is_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, [0xff, 0xfe, b';']).unwrap();

        let mut repo = InventoryRepository::open(&path);
        assert!(repo.is_empty());

        repo.add(widget());
        assert!(repo.is_persisted());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Code;Category;Name;Quantity;Price\r\nA1;Tools;Widget;10;2.500\r\n"
        );
    }

    #[test]
    fn later_duplicate_rows_win_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, "h;h;h;h;h\nA1;Old;Widget;1;1\nA1;New;Widget;2;2\n").unwrap();

        let repo = InventoryRepository::open(&path);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("A1").unwrap().category(), "New");
    }
}
