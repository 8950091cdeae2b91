use metrics::{IntoLabels, Label, SharedString};

/// Holder of the [Label]s attached to a metric.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
