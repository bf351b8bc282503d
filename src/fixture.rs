//! Portfolio page markup shared by the controller and page tests.

use crate::dom::{MemoryDom, NodeId};

/// Handles to the interesting elements of [`portfolio_page`].
pub struct PortfolioPage {
    pub dom: MemoryDom,
    pub navbar: NodeId,
    pub menu_trigger: NodeId,
    pub bars: [NodeId; 3],
    pub nav_links: NodeId,
    pub theme_toggle: NodeId,
    pub alert: NodeId,
    pub alert_close: NodeId,
    pub home_link: NodeId,
    pub about_link: NodeId,
    pub missing_link: NodeId,
    pub cards: Vec<NodeId>,
    pub form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub message: NodeId,
}

fn link(dom: &mut MemoryDom, parent: NodeId, href: &str) -> NodeId {
    let a = dom.create(parent, "a", &[]);
    dom.set_attribute(a, "href", href);
    a
}

fn field(dom: &mut MemoryDom, form: NodeId, tag: &str, name: &str) -> NodeId {
    let group = dom.create(form, "div", &["form-group"]);
    let input = dom.create(group, tag, &["form-control"]);
    dom.set_attribute(input, "name", name);
    dom.set_value(input, "");
    input
}

/// A page carrying every element the controllers look for.
pub fn portfolio_page() -> PortfolioPage {
    let mut dom = MemoryDom::new();
    let body = dom.body();

    let navbar = dom.create(body, "nav", &["navbar"]);
    let menu_trigger = dom.create(navbar, "button", &["mobile-menu-btn"]);
    let bars = [
        dom.create(menu_trigger, "span", &[]),
        dom.create(menu_trigger, "span", &[]),
        dom.create(menu_trigger, "span", &[]),
    ];
    let nav_links = dom.create(navbar, "ul", &["nav-links"]);
    let home_link = link(&mut dom, nav_links, "#");
    let about_link = link(&mut dom, nav_links, "#about");
    let missing_link = link(&mut dom, nav_links, "#nowhere");
    let theme_toggle = dom.create(navbar, "button", &["theme-toggle"]);

    let alert = dom.create(body, "div", &["alert", "alert-success"]);
    let alert_close = dom.create(alert, "button", &["close-alert"]);

    let about = dom.create(body, "section", &[]);
    dom.set_attribute(about, "id", "about");
    dom.set_layout(about, 900.0, 900.0);

    let mut cards = Vec::new();
    let reveal = ["timeline-item", "education-card", "skill-category", "project-card", "certification-card"];
    for (class, top) in reveal.into_iter().zip([400.0, 700.0, 1000.0, 1300.0, 1600.0]) {
        let card = dom.create(about, "div", &[class]);
        dom.set_layout(card, top, top);
        cards.push(card);
    }

    let form = dom.create(body, "form", &["contact-form"]);
    let name = field(&mut dom, form, "input", "name");
    let email = field(&mut dom, form, "input", "email");
    let message = field(&mut dom, form, "textarea", "message");

    PortfolioPage {
        dom,
        navbar,
        menu_trigger,
        bars,
        nav_links,
        theme_toggle,
        alert,
        alert_close,
        home_link,
        about_link,
        missing_link,
        cards,
        form,
        name,
        email,
        message,
    }
}
