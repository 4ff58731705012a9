//! SOAP request envelope for the `checkTin` operation.

use std::sync::LazyLock;

use crate::core::{Element, TinError};

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace of the `checkTin` request and response types.
pub const TIN_TYPES_NAMESPACE: &str = "urn:ec.europa.eu:taxud:tin:services:checkTin:types";

static REQUEST_TEMPLATE: LazyLock<Element> = LazyLock::new(|| {
    let check_tin = Element::new("checkTin")
        .with_attribute("xmlns", TIN_TYPES_NAMESPACE)
        .with_child(Element::new("countryCode"))
        .with_child(Element::new("tinNumber"));
    Element::new("soapenv:Envelope")
        .with_attribute("xmlns:soapenv", SOAP_ENV_NAMESPACE)
        .with_child(Element::new("soapenv:Header"))
        .with_child(Element::new("soapenv:Body").with_child(check_tin))
});

/// The shared, unfilled request envelope.
pub fn request_template() -> &'static Element {
    &REQUEST_TEMPLATE
}

pub(crate) fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, TinError> {
    if value.is_empty() {
        return Err(TinError::MissingArgument(name));
    }
    Ok(value)
}

/// Build the `checkTin` SOAP envelope for a country code and TIN.
///
/// Values are inserted as given; format checks are left to the service.
///
/// # Errors
///
/// Returns [`TinError::MissingArgument`] if either value is the empty
/// string. Whitespace is a value and is sent unchanged.
pub fn build_request(country_code: &str, tin_number: &str) -> Result<String, TinError> {
    let country_code = require("countryCode", country_code)?;
    let tin_number = require("tinNumber", tin_number)?;

    let mut doc = REQUEST_TEMPLATE.clone();
    set_field(&mut doc, "countryCode", country_code)?;
    set_field(&mut doc, "tinNumber", tin_number)?;
    doc.to_xml_string()
}

fn set_field(doc: &mut Element, local_name: &str, value: &str) -> Result<(), TinError> {
    let el = doc
        .find_mut(local_name)
        .ok_or_else(|| TinError::Xml(format!("request template has no <{local_name}> element")))?;
    el.set_text(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NodePath, parse_response};

    #[test]
    fn fills_country_and_tin() {
        let xml = build_request("IT", "12345678901").unwrap();
        let doc = parse_response(&xml).unwrap();
        assert_eq!(NodePath::new(["checkTin", "countryCode"]).text(&doc), "IT");
        assert_eq!(NodePath::new(["checkTin", "tinNumber"]).text(&doc), "12345678901");
    }

    #[test]
    fn check_tin_is_in_types_namespace() {
        let xml = build_request("BE", "00012511119").unwrap();
        let doc = parse_response(&xml).unwrap();
        let check_tin = NodePath::new(["Body", "checkTin"]).select(&doc).unwrap();
        assert_eq!(check_tin.tag_name().namespace(), Some(TIN_TYPES_NAMESPACE));
    }

    #[test]
    fn template_is_not_mutated() {
        let before = request_template().clone();
        build_request("DE", "12345678911").unwrap();
        assert_eq!(request_template(), &before);
        let xml = request_template().to_xml_string().unwrap();
        assert!(xml.contains("<countryCode/><tinNumber/>"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let xml = build_request("IT", "1<2&3").unwrap();
        assert!(xml.contains("<tinNumber>1&lt;2&amp;3</tinNumber>"));
        let doc = parse_response(&xml).unwrap();
        assert_eq!(NodePath::new(["checkTin", "tinNumber"]).text(&doc), "1<2&3");
    }

    #[test]
    fn empty_arguments_are_rejected() {
        assert!(matches!(
            build_request("", "123"),
            Err(TinError::MissingArgument("countryCode"))
        ));
        assert!(matches!(
            build_request("IT", ""),
            Err(TinError::MissingArgument("tinNumber"))
        ));
    }

    #[test]
    fn whitespace_only_values_are_sent() {
        let xml = build_request(" ", "\t").unwrap();
        assert!(xml.contains("<countryCode> </countryCode>"));
        assert!(xml.contains("<tinNumber>\t</tinNumber>"));
    }

    #[test]
    fn values_are_not_normalized() {
        let xml = build_request("gr", " 123 ").unwrap();
        assert!(xml.contains("<countryCode>gr</countryCode>"));
        assert!(xml.contains("<tinNumber> 123 </tinNumber>"));
    }
}
