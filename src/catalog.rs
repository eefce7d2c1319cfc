use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

const ADJECTIVES: [&str; 6] = ["Red", "Compact", "Vintage", "Wireless", "Leather", "Smart"];
const NOUNS: [&str; 7] = ["phone", "shoes", "camera", "watch", "headphones", "backpack", "lamp"];

impl Catalog {
    /// Deterministic demo inventory.
    pub fn sample(count: u32) -> Self {
        let items = (1..=count)
            .map(|id| {
                let index = (id - 1) as usize;
                let adjective = ADJECTIVES[index % ADJECTIVES.len()];
                let noun = NOUNS[index % NOUNS.len()];
                Item {
                    id,
                    title: format!("{} {} #{}", adjective, noun, id),
                }
            })
            .collect();
        Self { items }
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self { items })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|err| {
            AppError::Internal(format!("could not read {}: {}", path.display(), err).into())
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose title contains `keyword`, ignoring case. A missing or
    /// blank keyword matches everything.
    pub fn search(&self, keyword: Option<&str>) -> Vec<&Item> {
        let needle = keyword
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_lowercase);

        match needle {
            Some(needle) => self
                .items
                .iter()
                .filter(|item| item.title.to_lowercase().contains(&needle))
                .collect(),
            None => self.items.iter().collect(),
        }
    }
}

pub struct Page<'a> {
    pub items: &'a [&'a Item],
    pub number: u32,
    pub total_pages: u32,
    pub total_items: usize,
}

/// Slices out the 1-indexed page `number`. An empty list still has one
/// (empty) page; anything outside `1..=total_pages` is `None`.
pub fn paginate<'a>(items: &'a [&'a Item], number: u32, per_page: usize) -> Option<Page<'a>> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let total_pages = u32::try_from(total_pages).ok()?;

    if number == 0 || number > total_pages {
        return None;
    }

    let start = (number as usize - 1) * per_page;
    let end = std::cmp::min(start + per_page, items.len());

    Some(Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
    })
}
