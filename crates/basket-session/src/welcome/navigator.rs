/// Navigation boundary: the host UI moves to the main screen.
pub trait Navigator {
    /// `replace` = true replaces the current history entry so the welcome
    /// screen is not reachable with back-navigation.
    fn navigate_to_main(&mut self, replace: bool);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate_to_main(&mut self, replace: bool) {
        (**self).navigate_to_main(replace)
    }
}
