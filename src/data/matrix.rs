use std::collections::{BTreeMap, BTreeSet, HashMap};

/// User × title rating matrix
///
/// Each cell holds the mean of one user's ratings for one title. Titles are
/// columns, ordered ascending; a column only exists if at least one user
/// rated the title.
#[derive(Debug, Clone, Default)]
pub struct RatingMatrix {
    users: Vec<String>,
    titles: Vec<String>,
    title_index: HashMap<String, usize>,
    /// `columns[title][user]`
    columns: Vec<Vec<Option<f64>>>,
}

impl RatingMatrix {
    /// Pivots `(user, title, rating)` triples, averaging repeated cells
    pub fn pivot<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        let mut cells: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
        for (user, title, rating) in entries {
            let cell = cells.entry((user, title)).or_insert((0.0, 0));
            cell.0 += rating;
            cell.1 += 1;
        }

        let users: Vec<String> = cells
            .keys()
            .map(|(user, _)| *user)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let titles: Vec<String> = cells
            .keys()
            .map(|(_, title)| *title)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let user_index: HashMap<&str, usize> = users
            .iter()
            .enumerate()
            .map(|(i, user)| (user.as_str(), i))
            .collect();
        let title_index: HashMap<String, usize> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| (title.clone(), i))
            .collect();

        let mut columns = vec![vec![None; users.len()]; titles.len()];
        for ((user, title), (sum, count)) in &cells {
            let column = title_index[*title];
            let row = user_index[*user];
            columns[column][row] = Some(sum / *count as f64);
        }

        Self {
            users,
            titles,
            title_index,
            columns,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, title: &str) -> bool {
        self.title_index.contains_key(title)
    }

    /// Ratings for one title, indexed by user
    pub fn column(&self, title: &str) -> Option<&[Option<f64>]> {
        self.title_index
            .get(title)
            .map(|&index| self.columns[index].as_slice())
    }

    /// Every title paired with its column, in title order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.titles
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, user: &str, title: &str) -> Option<f64> {
        let row = self.users.iter().position(|u| u == user)?;
        self.column(title)?[row]
    }
}
