use lazy_static::lazy_static;
use std::fmt;

/// Number of tiles on the board.
pub const BOARD_SIZE: usize = 39;

/// Position of the jail tile on the game board.
pub const JAIL_POSITION: usize = 30;

/// Position of the "just visiting" tile next to the jail.
pub const JAIL_VISIT_POSITION: usize = 10;

/// What kind of property a tile holds. The kind only determines how the
/// price was derived: stations and services have fixed prices, plot
/// prices rise with board position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Plot,
    Station,
    Service,
}

/// A purchasable tile. Ownership is never modeled; the price is inert data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub price: u32,
    pub kind: PropertyKind,
}

impl Property {
    fn plot(name: &'static str, price: u32) -> Property {
        Property {
            name,
            price,
            kind: PropertyKind::Plot,
        }
    }

    fn station(name: &'static str) -> Property {
        Property {
            name,
            price: 20_000,
            kind: PropertyKind::Station,
        }
    }

    fn service(name: &'static str) -> Property {
        Property {
            name,
            price: 15_000,
            kind: PropertyKind::Service,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One tile of the board: a special tile or a property.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tile {
    Start,
    CommunityChest,
    IncomeTaxes,
    Chance,
    JailVisit,
    PublicPark,
    Jail,
    LuxuryTax,
    Property(Property),
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Start => f.write_str("start"),
            Tile::CommunityChest => f.write_str("community_chest"),
            Tile::IncomeTaxes => f.write_str("income_taxes"),
            Tile::Chance => f.write_str("chance"),
            Tile::JailVisit => f.write_str("jail_visit"),
            Tile::PublicPark => f.write_str("public_park"),
            Tile::Jail => f.write_str("jail"),
            Tile::LuxuryTax => f.write_str("luxury_tax"),
            Tile::Property(property) => fmt::Display::fmt(property, f),
        }
    }
}

fn plot(name: &'static str, price: u32) -> Tile {
    Tile::Property(Property::plot(name, price))
}

fn station(name: &'static str) -> Tile {
    Tile::Property(Property::station(name))
}

fn service(name: &'static str) -> Tile {
    Tile::Property(Property::service(name))
}

/// Tile at `index`, normalized around the board. Pure lookup; cannot fail.
pub fn tile_at(index: usize) -> &'static Tile {
    &TILES[index % BOARD_SIZE]
}

lazy_static! {
    /// The game board in play order. Fixed for the life of the process.
    pub static ref TILES: [Tile; BOARD_SIZE] = [
        Tile::Start,
        plot("belleville", 6_000),
        Tile::CommunityChest,
        plot("lecourbe", 6_000),
        Tile::IncomeTaxes,
        station("gare montparnasse"),
        plot("vaugirard", 10_000),
        Tile::Chance,
        plot("courcelles", 10_000),
        plot("république", 12_000),
        Tile::JailVisit,
        plot("la villette", 14_000),
        service("electricity"),
        plot("neuilly", 14_000),
        plot("paradis", 16_000),
        station("gare de lyon"),
        plot("mozart", 18_000),
        Tile::CommunityChest,
        plot("saint michel", 18_000),
        plot("pigalle", 20_000),
        Tile::PublicPark,
        plot("matignon", 22_000),
        Tile::Chance,
        plot("malesherbes", 22_000),
        plot("henri martin", 24_000),
        station("gare du nord"),
        plot("saint honoré", 26_000),
        plot("la bourse", 26_000),
        service("water"),
        plot("lafayette", 28_000),
        Tile::Jail,
        plot("breteuil", 30_000),
        plot("foch", 30_000),
        Tile::CommunityChest,
        plot("capucines", 32_000),
        station("saint lazare"),
        Tile::Chance,
        plot("champs élysées", 35_000),
        Tile::LuxuryTax,
    ];
}
