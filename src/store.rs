//! Persistence of selectors
//!
//! Only selectors using a natural [`Order`] can be stored: a closure cannot
//! be serialized. The stored form holds the capacity, the order and the
//! retained values.

use std::{fs, fs::File, path::Path};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::Result, order::Order, select::BoundedSelector};

pub const SELECTOR_CBOR: &str = "selector.cbor";

#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    capacity: usize,
    order: Order,
    values: &'a [T],
}

#[derive(Deserialize)]
struct Snapshot<T> {
    capacity: usize,
    #[serde(default)]
    order: Order,
    values: Vec<T>,
}

impl<T: Ord + Serialize> Serialize for BoundedSelector<T, Order> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SnapshotRef {
            capacity: self.capacity(),
            order: self.order(),
            values: self.result(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for BoundedSelector<T, Order> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let snapshot = Snapshot::<T>::deserialize(deserializer)?;
        BoundedSelector::from_values(snapshot.capacity, snapshot.order, snapshot.values)
            .map_err(serde::de::Error::custom)
    }
}

/// Saves the selector state into `folder/selector.cbor`
pub fn save_selector<T: Ord + Serialize>(
    selector: &BoundedSelector<T, Order>,
    folder: &Path,
) -> Result<()> {
    fs::create_dir_all(folder)?;
    let path = folder.join(SELECTOR_CBOR);
    debug!(
        "Saving selector ({} / {} values) to {}",
        selector.len(),
        selector.capacity(),
        path.display()
    );

    let file = File::options()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    ciborium::ser::into_writer(selector, file)?;
    Ok(())
}

/// Loads a selector saved with [`save_selector`]
pub fn load_selector<T: Ord + DeserializeOwned>(folder: &Path) -> Result<BoundedSelector<T, Order>> {
    let path = folder.join(SELECTOR_CBOR);
    debug!("Loading selector from {}", path.display());

    let file = File::options().read(true).open(path)?;
    let selector: BoundedSelector<T, Order> = ciborium::de::from_reader(file)?;
    Ok(selector)
}
