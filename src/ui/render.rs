use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::core::pricing;
use crate::core::session::ShopSession;
use crate::domain::model::View;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "In Cart")]
    in_cart: u32,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Unit Cost")]
    unit_cost: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

pub fn render_view(session: &ShopSession) -> String {
    match session.view() {
        View::Catalog => render_product_list(session),
        View::Cart => render_cart(session),
    }
}

pub fn render_product_list(session: &ShopSession) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style("Plants for Sale").bold()));

    let rows: Vec<ProductRow> = session
        .catalog()
        .items()
        .iter()
        .map(|item| ProductRow {
            name: item.name.clone(),
            description: item.description.clone(),
            cost: String::from(item.cost),
            image: item.image.clone(),
            in_cart: session.in_cart(&item.name),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&toggle_button(session.view()));
    output
}

pub fn render_cart(session: &ShopSession) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", style("Your Cart").bold()));

    let lines = session.store().items();
    if lines.is_empty() {
        output.push_str(&format!("{}\n", style("Your cart is empty.").dim()));
    } else {
        let rows: Vec<CartRow> = lines
            .iter()
            .map(|line| CartRow {
                name: line.name.clone(),
                description: line.description.clone(),
                unit_cost: format!("${} per unit", line.cost),
                quantity: line.quantity,
                subtotal: format!("${}", pricing::line_subtotal(line)),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded()).with(Alignment::left());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "{}\n",
        style(format!("Total: ${}", session.total())).green().bold()
    ));
    output.push_str("[Continue Shopping] [Checkout]\n");
    output.push_str(&toggle_button(session.view()));
    output
}

fn toggle_button(view: View) -> String {
    format!("[{}]\n", view.toggle_label())
}
