//! Read-only periodic table, built once on first lookup.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Basic periodic table data for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub chinese_name: &'static str,
    pub atomic_number: u32,
    pub atomic_weight: f64,
}

// (symbol, name, chinese name, atomic number, atomic weight)
const ELEMENTS: &[(&str, &str, &str, u32, f64)] = &[
    ("H", "Hydrogen", "氢", 1, 1.008),
    ("He", "Helium", "氦", 2, 4.0026),
    ("Li", "Lithium", "锂", 3, 6.94),
    ("Be", "Beryllium", "铍", 4, 9.0122),
    ("B", "Boron", "硼", 5, 10.81),
    ("C", "Carbon", "碳", 6, 12.011),
    ("N", "Nitrogen", "氮", 7, 14.007),
    ("O", "Oxygen", "氧", 8, 15.999),
    ("F", "Fluorine", "氟", 9, 18.998),
    ("Ne", "Neon", "氖", 10, 20.180),
    ("Na", "Sodium", "钠", 11, 22.990),
    ("Mg", "Magnesium", "镁", 12, 24.305),
    ("Al", "Aluminum", "铝", 13, 26.982),
    ("Si", "Silicon", "硅", 14, 28.085),
    ("P", "Phosphorus", "磷", 15, 30.974),
    ("S", "Sulfur", "硫", 16, 32.06),
    ("Cl", "Chlorine", "氯", 17, 35.45),
    ("Ar", "Argon", "氩", 18, 39.948),
    ("K", "Potassium", "钾", 19, 39.098),
    ("Ca", "Calcium", "钙", 20, 40.078),
    ("Sc", "Scandium", "钪", 21, 44.956),
    ("Ti", "Titanium", "钛", 22, 47.867),
    ("V", "Vanadium", "钒", 23, 50.942),
    ("Cr", "Chromium", "铬", 24, 51.996),
    ("Mn", "Manganese", "锰", 25, 54.938),
    ("Fe", "Iron", "铁", 26, 55.845),
    ("Co", "Cobalt", "钴", 27, 58.933),
    ("Ni", "Nickel", "镍", 28, 58.693),
    ("Cu", "Copper", "铜", 29, 63.546),
    ("Zn", "Zinc", "锌", 30, 65.38),
    ("Ga", "Gallium", "镓", 31, 69.723),
    ("Ge", "Germanium", "锗", 32, 72.630),
    ("As", "Arsenic", "砷", 33, 74.922),
    ("Se", "Selenium", "硒", 34, 78.971),
    ("Br", "Bromine", "溴", 35, 79.904),
    ("Kr", "Krypton", "氪", 36, 83.798),
    ("Rb", "Rubidium", "铷", 37, 85.468),
    ("Sr", "Strontium", "锶", 38, 87.62),
    ("Y", "Yttrium", "钇", 39, 88.906),
    ("Zr", "Zirconium", "锆", 40, 91.224),
    ("Nb", "Niobium", "铌", 41, 92.906),
    ("Mo", "Molybdenum", "钼", 42, 95.95),
    ("Ag", "Silver", "银", 47, 107.87),
    ("Sn", "Tin", "锡", 50, 118.71),
    ("I", "Iodine", "碘", 53, 126.90),
    ("Xe", "Xenon", "氙", 54, 131.29),
    ("Cs", "Cesium", "铯", 55, 132.91),
    ("Ba", "Barium", "钡", 56, 137.33),
    ("Au", "Gold", "金", 79, 196.97),
    ("Hg", "Mercury", "汞", 80, 200.59),
    ("Pb", "Lead", "铅", 82, 207.2),
    ("U", "Uranium", "铀", 92, 238.03),
];

struct Table {
    elements: Vec<Element>,
    by_key: HashMap<&'static str, usize>,
}

static TABLE: Lazy<Table> = Lazy::new(build_table);

fn build_table() -> Table {
    let elements: Vec<Element> = ELEMENTS
        .iter()
        .map(|&(symbol, name, chinese_name, atomic_number, atomic_weight)| Element {
            symbol,
            name,
            chinese_name,
            atomic_number,
            atomic_weight,
        })
        .collect();
    let mut by_key = HashMap::with_capacity(elements.len() * 2);
    for (i, el) in elements.iter().enumerate() {
        by_key.insert(el.symbol, i);
        by_key.insert(el.chinese_name, i);
    }
    Table { elements, by_key }
}

/// Find an element by symbol (`"Fe"`) or Chinese name (`"铁"`). Exact match only.
pub fn lookup(key: &str) -> Option<&'static Element> {
    let table = Lazy::force(&TABLE);
    table.by_key.get(key).map(|&i| &table.elements[i])
}

/// Number of elements in the table.
pub fn len() -> usize {
    TABLE.elements.len()
}
