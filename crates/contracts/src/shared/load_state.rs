/// Lifecycle of data fetched after the page is mounted
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(v) => LoadState::Loaded(v),
            Err(e) => LoadState::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state: LoadState<Vec<u32>> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok = LoadState::from_result(Ok(vec![1, 2]));
        assert_eq!(ok.loaded(), Some(&vec![1, 2]));

        let failed: LoadState<Vec<u32>> = LoadState::from_result(Err("404".to_string()));
        assert_eq!(failed.error(), Some("404"));
        assert!(!failed.is_loading());
    }
}
