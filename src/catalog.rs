//! Static showcase cards shown on the storefront
//!
//! Display data only: cards have no price, stock or identity beyond their title.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Electronics,
    Smartphones,
    Toys,
    Furniture,
    Home,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Electronics,
        Department::Smartphones,
        Department::Toys,
        Department::Furniture,
        Department::Home,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Department::Electronics => "Electronics",
            Department::Smartphones => "Smartphones",
            Department::Toys => "Toys & Games",
            Department::Furniture => "Furniture",
            Department::Home => "Home & Kitchen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: &'static str,
    pub department: Department,
}

const fn card(title: &'static str, department: Department) -> ProductCard {
    ProductCard { title, department }
}

pub const SHOWCASE: &[ProductCard] = &[
    card("MacBook Pro 14-inch", Department::Electronics),
    card("AirPods Pro (2nd generation)", Department::Electronics),
    card("iPad Pro 11-inch", Department::Electronics),
    card("Apple Watch Series 9", Department::Electronics),
    card("PlayStation 5 Console", Department::Electronics),
    card("iPhone 15", Department::Smartphones),
    card("Samsung Galaxy S24", Department::Smartphones),
    card("Nintendo Switch OLED", Department::Toys),
    card("Building Blocks Classic Set", Department::Toys),
    card("Remote Control Racing Car", Department::Toys),
    card("Ergonomic Office Chair", Department::Furniture),
    card("Solid Oak Bookshelf", Department::Furniture),
    card("Stainless Steel Cookware Set", Department::Home),
    card("Espresso Machine", Department::Home),
];
