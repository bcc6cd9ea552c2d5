//! Structures de l'enveloppe SOAP

use xmltree::{Element, XMLNode};

/// Enveloppe SOAP complète
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    /// En-tête SOAP optionnel
    pub header: Option<SoapHeader>,

    /// Corps SOAP contenant l'opération ou la réponse
    pub body: SoapBody,
}

/// En-tête SOAP
#[derive(Debug, Clone)]
pub struct SoapHeader {
    /// Contenu XML brut de l'en-tête
    pub content: Element,
}

/// Corps SOAP
#[derive(Debug, Clone)]
pub struct SoapBody {
    /// Contenu XML brut du corps
    pub content: Element,
}

impl SoapEnvelope {
    /// Crée une nouvelle enveloppe sans en-tête
    pub fn new(body: SoapBody) -> Self {
        Self { header: None, body }
    }
}

impl SoapBody {
    /// Premier élément enfant du corps dont le nom se termine par `suffix`
    ///
    /// Les réponses arrivent avec des préfixes de namespace variables
    /// (`m:`, `ns1:`, aucun...) ; la comparaison ignore donc le préfixe.
    pub fn child_with_suffix(&self, suffix: &str) -> Option<&Element> {
        find_child_with_suffix(&self.content, suffix)
    }
}

/// Premier enfant de `parent` dont le nom se termine par `suffix`
pub fn find_child_with_suffix<'a>(parent: &'a Element, suffix: &str) -> Option<&'a Element> {
    parent.children.iter().find_map(|node| match node {
        XMLNode::Element(elem) if elem.name.ends_with(suffix) => Some(elem),
        _ => None,
    })
}

/// Texte (trimmé, non vide) du premier enfant nommé `suffix`
pub fn child_text(parent: &Element, suffix: &str) -> Option<String> {
    find_child_with_suffix(parent, suffix)?
        .get_text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
