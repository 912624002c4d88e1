use std::cell::{
    Ref,
    RefCell
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::managererror::{ManagerError, parse_json_value};

#[derive(Deserialize)]
struct NamedJsonProp {
    name: String
}

/// Registry key of a JSON definition: its trimmed, non-empty `name` field.
pub fn registry_name(json_value: &serde_json::Value) -> Result<String, ManagerError> {
    let prop: NamedJsonProp = parse_json_value(json_value.clone())?;
    let name = prop.name.trim();
    if name.is_empty() {
        return Err(ManagerError::EmptyName);
    }
    Ok(name.to_owned())
}

/// Name-keyed registry filled from JSON objects carrying a `name` field.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>>;

    fn insert(&self, name: String, v: V);

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> where Self: Sized {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>> {
        self.map_cell.borrow()
    }

    fn insert(&self, name: String, v: V) {
        self.map_cell.borrow_mut().insert(name, v);
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let name = registry_name(&json_value)?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!("registered '{}'", name);
        self.insert(name, v);
        Ok(())
    }
}
