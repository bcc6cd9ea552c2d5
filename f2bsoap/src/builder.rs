//! Construction et sérialisation de documents SOAP

use xmltree::{Element, EmitterConfig, XMLNode};

/// Namespace de l'enveloppe SOAP 1.1
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Prologue XML du document sérialisé
///
/// L'émetteur de xmltree n'écrit qu'une déclaration UTF-8 figée ; les
/// services qui attendent un autre encodage (ISO-8859-1 notamment) ont
/// besoin d'un prologue écrit à la main.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Encodage déclaré dans le prologue (ex: "ISO-8859-1")
    pub encoding: String,

    /// Version XML déclarée dans le prologue (ex: "1.0")
    pub version: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            encoding: "UTF-8".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// Enveloppe un corps d'opération déjà construit dans un document SOAP
/// complet et le sérialise
///
/// Le corps garde ses propres déclarations de namespace ; l'enveloppe
/// n'ajoute que `xmlns:soap-env`.
pub fn build_soap_document(
    body_child: Element,
    config: &DocumentConfig,
) -> Result<String, xmltree::Error> {
    let mut body = Element::new("soap-env:Body");
    body.children.push(XMLNode::Element(body_child));

    let mut envelope = Element::new("soap-env:Envelope");
    envelope
        .attributes
        .insert("xmlns:soap-env".to_string(), SOAP_ENVELOPE_NS.to_string());
    envelope.children.push(XMLNode::Element(body));

    let mut buf = Vec::new();
    let emitter = EmitterConfig::new().write_document_declaration(false);
    envelope.write_with_config(&mut buf, emitter)?;

    let mut document = format!(
        "<?xml version=\"{}\" encoding=\"{}\"?>",
        config.version, config.encoding
    );
    document.push_str(&String::from_utf8(buf).unwrap());

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_and_prolog() {
        let mut body = Element::new("m:F2bCobranca");
        body.attributes.insert(
            "xmlns:m".to_string(),
            "http://www.f2b.com.br/soap/wsbilling.xsd".to_string(),
        );

        let config = DocumentConfig {
            encoding: "ISO-8859-1".to_string(),
            version: "1.0".to_string(),
        };
        let xml = build_soap_document(body, &config).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>"));
        assert!(xml.contains("xmlns:soap-env=\"http://schemas.xmlsoap.org/soap/envelope/\""));
        assert!(xml.contains("<soap-env:Body>"));
        assert!(xml.contains("xmlns:m=\"http://www.f2b.com.br/soap/wsbilling.xsd\""));
    }

    #[test]
    fn test_default_prolog_is_utf8() {
        let xml = build_soap_document(Element::new("m:Ping"), &DocumentConfig::default()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }
}
