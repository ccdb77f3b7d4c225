use askama::Template;

use crate::app::{DetailPage, ListPage};

#[derive(Template)]
#[template(path = "pokemon/pokemon_list.html")]
pub struct ListTemplate<'a> {
    pub page: &'a ListPage,
}

#[derive(Template)]
#[template(path = "pokemon/pokemon_detail.html")]
pub struct DetailTemplate<'a> {
    pub page: &'a DetailPage,
}
