#[derive(Debug, Default, Clone)]
pub struct WithPrevious<T> {
    pub current: T,
    pub previous: Option<T>
}

impl<T> WithPrevious<T> {
    pub fn new(initial_value: T) -> WithPrevious<T> {
        WithPrevious {
            current: initial_value,
            previous: None,
        }
    }

    pub fn update_value(&mut self, new_value: T)
    where T: Clone, {
        self.previous = Some(self.current.clone());
        self.current = new_value;
    }

    pub fn is_same_as_previous(&self) -> bool
    where T: PartialEq {
        match &self.previous {
            Some(previous) => previous == &self.current,
            None => false,
        }
    }
}

impl WithPrevious<bool> {
    pub fn rose(&self) -> bool {
        self.current && self.previous == Some(false)
    }
}
