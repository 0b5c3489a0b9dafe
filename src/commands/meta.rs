use anyhow::Result;
use taqweem_core::display::{page_description, page_title};

use super::Session;

pub fn run(session: &Session, year: Option<i32>) -> Result<()> {
    let Some(year) = session.year(year)? else {
        anyhow::bail!("The event dataset is empty");
    };
    println!("{}", page_title(year));
    println!("{}", page_description(year));
    Ok(())
}
