mod categorization;
mod derive;
mod pricing;

pub use categorization::{classify, Category};
pub use derive::{derive_shopping_list, LineItem, ShoppingList};
pub use pricing::estimate_price;
