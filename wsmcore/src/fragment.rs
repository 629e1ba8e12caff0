//! Construction structurée de fragments XML
//!
//! Certains corps de méthodes (références d'endpoint, éléments optionnels,
//! valeurs typées imbriquées) ne peuvent pas être exprimés par le
//! sérialiseur générique de payloads. Ils sont construits ici sous forme
//! d'arbres [`xmltree::Element`] puis rendus en XML compact.
//!
//! L'ordre des enfants est celui de leur insertion et il est significatif
//! pour les agents AMT.

pub use xmltree::Element;
use xmltree::{EmitterConfig, XMLNode};

use crate::WsmanError;
use crate::actions::ns;
use crate::selector::Selector;

/// Élément sans attribut, destiné à recevoir des enfants
pub fn container(name: &str) -> Element {
    Element::new(name)
}

/// Élément contenant uniquement du texte
pub fn element(name: &str, text: impl Into<String>) -> Element {
    let mut elem = container(name);
    elem.children.push(XMLNode::Text(text.into()));
    elem
}

/// Élément vide déclarant le préfixe `prefix` sur `namespace`
///
/// Avec un préfixe vide, c'est le namespace par défaut qui est déclaré.
pub fn namespaced(name: &str, prefix: &str, namespace: &str) -> Element {
    let mut elem = container(name);
    let attr = if prefix.is_empty() {
        "xmlns".to_string()
    } else {
        format!("xmlns:{}", prefix)
    };
    elem.attributes.insert(attr, namespace.to_string());
    elem
}

/// Élément texte déclarant son propre namespace
pub fn namespaced_text(
    name: &str,
    prefix: &str,
    namespace: &str,
    text: impl Into<String>,
) -> Element {
    let mut elem = namespaced(name, prefix, namespace);
    elem.children.push(XMLNode::Text(text.into()));
    elem
}

/// Ajoute `child` à la fin des enfants de `parent`
pub fn push(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}

/// Ajoute un élément texte si la valeur est présente
pub fn push_opt<T: ToString>(parent: &mut Element, name: &str, value: Option<T>) {
    if let Some(value) = value {
        push(parent, element(name, value.to_string()));
    }
}

fn selector_element(name: &str, selector: &Selector) -> Element {
    let mut elem = element(name, selector.value.clone());
    elem.attributes
        .insert("Name".to_string(), selector.name.clone());
    elem
}

/// `<w:SelectorSet>` préfixé, les préfixes étant déclarés par l'enveloppe
///
/// Les sélecteurs sans nom sont ignorés ; `None` si aucun ne reste.
pub fn selector_set(selectors: &[Selector]) -> Option<Element> {
    let mut set = container("w:SelectorSet");
    for selector in selectors.iter().filter(|s| !s.is_empty()) {
        push(&mut set, selector_element("w:Selector", selector));
    }
    (!set.children.is_empty()).then_some(set)
}

/// `<SelectorSet>` dans le namespace par défaut `wsman.xsd`
pub fn qualified_selector_set(selectors: &[Selector]) -> Option<Element> {
    let mut set = namespaced("SelectorSet", "", ns::WSMAN);
    for selector in selectors.iter().filter(|s| !s.is_empty()) {
        push(&mut set, selector_element("Selector", selector));
    }
    (!set.children.is_empty()).then_some(set)
}

/// Référence d'endpoint WS-Addressing aux préfixes `a:` et `w:`
///
/// ```text
/// <{name}>
///   <a:Address>{address}</a:Address>
///   <a:ReferenceParameters>
///     <w:ResourceURI>{resource_uri}</w:ResourceURI>
///     <w:SelectorSet>…</w:SelectorSet>
///   </a:ReferenceParameters>
/// </{name}>
/// ```
pub fn endpoint_reference(
    name: &str,
    address: &str,
    resource_uri: &str,
    selectors: &[Selector],
) -> Element {
    let mut epr = container(name);
    push(&mut epr, element("a:Address", address));

    let mut parameters = container("a:ReferenceParameters");
    push(&mut parameters, element("w:ResourceURI", resource_uri));
    if let Some(set) = selector_set(selectors) {
        push(&mut parameters, set);
    }
    push(&mut epr, parameters);
    epr
}

/// Référence d'endpoint dont chaque élément déclare son namespace
///
/// L'adresse est l'URI du namespace WS-Addressing lui-même.
///
/// ```text
/// <{name}>
///   <Address xmlns="…/addressing">…/addressing</Address>
///   <ReferenceParameters xmlns="…/addressing">
///     <ResourceURI xmlns="…/wsman.xsd">{resource_uri}</ResourceURI>
///     <SelectorSet xmlns="…/wsman.xsd">…</SelectorSet>
///   </ReferenceParameters>
/// </{name}>
/// ```
pub fn qualified_endpoint_reference(
    name: &str,
    resource_uri: &str,
    selectors: &[Selector],
) -> Element {
    let mut epr = container(name);
    push(
        &mut epr,
        namespaced_text("Address", "", ns::ADDRESSING, ns::ADDRESSING),
    );

    let mut parameters = namespaced("ReferenceParameters", "", ns::ADDRESSING);
    push(
        &mut parameters,
        namespaced_text("ResourceURI", "", ns::WSMAN, resource_uri),
    );
    if let Some(set) = qualified_selector_set(selectors) {
        push(&mut parameters, set);
    }
    push(&mut epr, parameters);
    epr
}

/// Rend un élément en XML compact, sans déclaration ni indentation
///
/// Les éléments vides sont rendus sous la forme `<a></a>`.
pub fn render(element: &Element) -> Result<String, WsmanError> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .write_document_declaration(false)
        .perform_indent(false)
        .normalize_empty_elements(false);
    element.write_with_config(&mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::create_selector;

    #[test]
    fn test_render_compact() {
        let mut root = namespaced("h:Foo_INPUT", "h", "urn:test");
        push(&mut root, element("h:A", "1"));
        push(&mut root, element("h:B", "two"));
        push_opt(&mut root, "h:C", None::<u32>);
        push_opt(&mut root, "h:D", Some(true));
        assert_eq!(
            render(&root).unwrap(),
            r#"<h:Foo_INPUT xmlns:h="urn:test"><h:A>1</h:A><h:B>two</h:B><h:D>true</h:D></h:Foo_INPUT>"#
        );
    }

    #[test]
    fn test_render_empty_element() {
        let root = namespaced("h:StartOptIn_INPUT", "h", "urn:test");
        assert_eq!(
            render(&root).unwrap(),
            r#"<h:StartOptIn_INPUT xmlns:h="urn:test"></h:StartOptIn_INPUT>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let elem = element("h:Name", "a<b&c");
        assert_eq!(render(&elem).unwrap(), "<h:Name>a&lt;b&amp;c</h:Name>");
    }

    #[test]
    fn test_selector_set_matches_header_codec() {
        let selector = Selector::instance_id("Intel(r) AMT Device 0");
        let set = selector_set(std::slice::from_ref(&selector)).unwrap();
        assert_eq!(render(&set).unwrap(), create_selector(Some(&selector)));
    }

    #[test]
    fn test_selector_set_skips_empty_names() {
        assert!(selector_set(&[Selector::new("", "x")]).is_none());
        let set = qualified_selector_set(&[
            Selector::new("", "x"),
            Selector::new("Name", "y"),
        ])
        .unwrap();
        assert_eq!(
            render(&set).unwrap(),
            r#"<SelectorSet xmlns="http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd"><Selector Name="Name">y</Selector></SelectorSet>"#
        );
    }

    #[test]
    fn test_endpoint_reference() {
        let epr = endpoint_reference(
            "h:WiFiEndpoint",
            "/wsman",
            "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_WiFiEndpoint",
            &[Selector::new("Name", "WiFi Endpoint 0")],
        );
        assert_eq!(
            render(&epr).unwrap(),
            concat!(
                "<h:WiFiEndpoint><a:Address>/wsman</a:Address><a:ReferenceParameters>",
                "<w:ResourceURI>http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_WiFiEndpoint</w:ResourceURI>",
                r#"<w:SelectorSet><w:Selector Name="Name">WiFi Endpoint 0</w:Selector></w:SelectorSet>"#,
                "</a:ReferenceParameters></h:WiFiEndpoint>"
            )
        );
    }

    #[test]
    fn test_qualified_endpoint_reference_order() {
        let epr = qualified_endpoint_reference(
            "h:ManagedElement",
            "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ComputerSystem",
            &[
                Selector::new("CreationClassName", "CIM_ComputerSystem"),
                Selector::new("Name", "ManagedSystem"),
            ],
        );
        assert_eq!(
            render(&epr).unwrap(),
            concat!(
                "<h:ManagedElement>",
                r#"<Address xmlns="http://schemas.xmlsoap.org/ws/2004/08/addressing">http://schemas.xmlsoap.org/ws/2004/08/addressing</Address>"#,
                r#"<ReferenceParameters xmlns="http://schemas.xmlsoap.org/ws/2004/08/addressing">"#,
                r#"<ResourceURI xmlns="http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd">http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ComputerSystem</ResourceURI>"#,
                r#"<SelectorSet xmlns="http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd">"#,
                r#"<Selector Name="CreationClassName">CIM_ComputerSystem</Selector>"#,
                r#"<Selector Name="Name">ManagedSystem</Selector>"#,
                "</SelectorSet>",
                "</ReferenceParameters>",
                "</h:ManagedElement>"
            )
        );
    }

    #[test]
    fn test_endpoint_reference_without_selector() {
        let epr = qualified_endpoint_reference("h:Target", "urn:resource", &[]);
        let xml = render(&epr).unwrap();
        assert!(!xml.contains("SelectorSet"));
        assert!(xml.ends_with("</ResourceURI></ReferenceParameters></h:Target>"));
    }
}
