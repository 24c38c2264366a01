//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::CashbookResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Show a category by title
    Show {
        /// Exact category title
        title: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> CashbookResult<()> {
    let service = CategoryService::new(&storage.categories);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Show { title } => {
            let category = service.get(&title)?;
            println!("Category: {}", category.title);
            println!("  ID: {}", category.id);
            println!("  Created: {}", category.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }

    Ok(())
}
