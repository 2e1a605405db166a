/// Species metadata shown on the about section of a detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub flavor_text: String,
    pub genus: String,
}
