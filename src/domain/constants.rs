//! Compiled-in default catalog data.
//!
//! Product order is display order in reports. Prices are index-aligned
//! currency strings and are parsed to cents at catalog construction time.
//! Override via `--catalog <file.toml>`.

/// Default product list with list prices, in report display order.
pub const DEFAULT_CATALOG: &[(&str, &str)] = &[
    ("Top Track 57\" - Silver", "$21.00"),
    ("Top Track 37\" - Silver", "$15.00"),
    ("Top Track Cover - Silver", "$1.00"),
    ("Standard 84\"", "$27.00"),
    ("Standard 72\"", "$22.00"),
    ("Standard 48\" - Silver", "$15.00"),
    ("Standard 36\" - Silver", "$11.00"),
    ("Standard Connector - Silver", "$3.00"),
    ("Wall Clip (Sold in Sets of 2)", "$4.50"),
    ("Closet Rod 2' - Silver", "$12.00"),
    ("Closet Rod 3' - Silver", "$16.00"),
    ("Closet Rod Holder, Pair - Silver", "$7.00"),
    ("Shelf 12\"x24\" - Silver", "$18.00"),
    ("Shelf 12\"x36\" -Silver", "$27.00"),
    ("Bracket 12\" - Silver", "$5.00"),
    ("Bracket Cover 12\", L/R - Silver", "$3.00"),
    ("Shelf Liner 12\"x24\"", "$2.00"),
    ("Shelf 16\"x24\" - Silver", "$22.00"),
    ("Shelf 16\"x36\" - Silver", "$34.00"),
    ("Bracket 16\" - Silver", "$7.00"),
    ("Bracket Cover 16\", L/R - Silver", "$4.00"),
    ("Shelf Liner 16\"x24\"", "$3.00"),
    ("Top Track Anchors", "$1.50"),
    ("Wall Clip Anchors, Pair - Silver", "$1.00"),
    ("Metal Drawer Frame 12\"x24\"", "$42.00"),
    ("Metal Mesh Basket 24\"", "$33.00"),
    ("Stationary Shoe Rack 24\" 2 Tier", "$44.00"),
    ("Stationary Shoe Rack 18\" 1 Tier", "$18.00"),
    ("Stationary Shoe Rack 24\" Single Row", "$26.00"),
    ("Gliding Shoe Rack 24\"", "$45.00"),
    ("Wood Fascia 18\"", "$36.00"),
    ("Wood Fascia 24\"", "$39.00"),
    ("Wood Fascia 36\"", "$49.00"),
    ("Wood Shelf 16\" x 24\"", "$78.00"),
    ("Wood Shelf 16\" x 30\"", "$97.00"),
    ("Solid Cubbie 7\"", "$118.00"),
    ("Solid Cubbie 7\" - 18\" wide", "$105.00"),
    ("Solid Cubbie 10\"", "$131.00"),
    ("Solid Cubbie 10\" - 18\" wide", "$120.00"),
    ("Wood Drawer 7\"", "$189.00"),
    ("Wood Drawer 7\" - 18\" wide", "$159.00"),
    ("Wood Drawer 10\"", "$218.00"),
    ("Wood Drawer 10\" - 18\" wide", "$182.00"),
    ("Drawer Frame 18\"", "$36.00"),
    ("Drawer Frame 24\"", "$42.00"),
];

/// Item names that never count as products and never set a wall designation.
/// The trailing space in "Wall A 5-10ft " matches the source exports verbatim.
pub const DEFAULT_IGNORED_ITEMS: &[&str] = &[
    "SPACE COUNT",
    "Wall D 10ft+",
    "Wall C 10ft+",
    "Wall A 10ft+",
    "Wall D 5-10ft",
    "Wall A 0-5ft",
    "Wall D 0-5ft",
    "Wall B 0-5ft",
    "Wall B 10ft+",
    "Wall A 5-10ft ",
    "Wall B 5-10ft",
    "Wall C 0-5ft",
    "Wall C 5-10ft",
];
