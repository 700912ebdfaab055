// In-memory page implementation
use crate::application::page::{ids, Fragment, Notification, Page};
use crate::domain::chart::ChartSpec;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Element {
    children: Vec<Fragment>,
    visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            visible: true,
        }
    }
}

/// Element tree of one rendered page. Charts, alerts and notifications are
/// recorded alongside so the page host can emit them.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    charts: HashMap<String, ChartSpec>,
    alerts: Vec<String>,
    notifications: Vec<Notification>,
    form_resets: Vec<String>,
}

impl Document {
    pub fn with_elements<'a>(element_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let elements = element_ids
            .into_iter()
            .map(|id| (id.to_string(), Element::default()))
            .collect();
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Regions of the dashboard page
    pub fn dashboard() -> Self {
        Self::with_elements([
            ids::TOTAL_COURSES,
            ids::AVERAGE_SCORE,
            ids::CERTIFICATES_TABLE_BODY,
            ids::DOMAIN_CHART,
            ids::DIFFICULTY_CHART,
            ids::PROGRESS_CHART,
            ids::NO_PROGRESS_DATA,
            ids::COMPLETION_CHART,
            ids::RECOMMENDED_COURSES,
            ids::LOADING_INDICATOR,
        ])
        .hidden(ids::NO_PROGRESS_DATA)
        .hidden(ids::LOADING_INDICATOR)
    }

    /// Regions of the certificate upload page
    pub fn upload_page() -> Self {
        let mut document = Self::with_elements([
            ids::CERTIFICATE_FORM,
            ids::COURSE_SELECT,
            ids::SUBMIT_RECOMMENDATIONS,
            ids::RECOMMENDATIONS_LIST,
            ids::RECOMMENDATIONS_SECTION,
        ])
        .hidden(ids::RECOMMENDATIONS_SECTION);
        document.append_children(
            ids::COURSE_SELECT,
            vec![Fragment::html(r#"<option value="">Select a course</option>"#)],
        );
        document
    }

    pub fn hidden(mut self, id: &str) -> Self {
        if let Some(element) = self.elements.get_mut(id) {
            element.visible = false;
        }
        self
    }

    pub fn children(&self, id: &str) -> &[Fragment] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.elements
            .get(id)
            .map(|e| e.children.iter().map(|f| f.html.as_str()).collect())
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.visible)
    }

    #[cfg(test)]
    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.get(id)
    }

    pub fn charts(&self) -> &HashMap<String, ChartSpec> {
        &self.charts
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[cfg(test)]
    pub fn form_resets(&self) -> &[String] {
        &self.form_resets
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            tracing::warn!("Page has no element with id {}", id);
        }
        element
    }
}

impl Page for Document {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn child_count(&self, id: &str) -> usize {
        self.children(id).len()
    }

    fn replace_children(&mut self, id: &str, children: Vec<Fragment>) {
        if let Some(element) = self.element_mut(id) {
            element.children = children;
        }
    }

    fn append_children(&mut self, id: &str, children: Vec<Fragment>) {
        if let Some(element) = self.element_mut(id) {
            element.children.extend(children);
        }
    }

    fn truncate_children(&mut self, id: &str, keep: usize) {
        if let Some(element) = self.element_mut(id) {
            element.children.truncate(keep);
        }
    }

    fn remove_keyed(&mut self, id: &str, key: &str) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        match element
            .children
            .iter()
            .position(|f| f.key.as_deref() == Some(key))
        {
            Some(index) => {
                element.children.remove(index);
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.element_mut(id) {
            element.visible = visible;
        }
    }

    fn reset_form(&mut self, id: &str) {
        if self.has_element(id) {
            self.form_resets.push(id.to_string());
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn draw_chart(&mut self, id: &str, chart: ChartSpec) {
        if self.element_mut(id).is_some() {
            self.charts.insert(id.to_string(), chart);
        }
    }
}
