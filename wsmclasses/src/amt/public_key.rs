use serde::Serialize;
use wsmcore::fragment::{element, endpoint_reference, namespaced, push};
use wsmcore::{Payload, Selector, WsmanError};

use crate::macros::define_resource;

define_resource! {
    /// Gestion des certificats et des paires de clés du firmware
    pub struct PublicKeyManagementService = "AMT_PublicKeyManagementService";
}

const PUBLIC_PRIVATE_KEY_PAIR: &str = "AMT_PublicPrivateKeyPair";

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:AddCertificate_INPUT")]
pub struct AddCertificateInput {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:CertificateBlob")]
    pub certificate_blob: String,
}

impl Payload for AddCertificateInput {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "h:AddTrustedRootCertificate_INPUT")]
pub struct AddTrustedRootCertificateInput {
    #[serde(rename = "@xmlns:h")]
    pub h: String,
    #[serde(rename = "h:CertificateBlob")]
    pub certificate_blob: String,
}

impl Payload for AddTrustedRootCertificateInput {
    fn set_namespace(&mut self, namespace: String) {
        self.h = namespace;
    }
}

/// Algorithme de signature d'une requête PKCS#10
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    Sha1Rsa = 0,
    Sha256Rsa = 1,
}

impl PublicKeyManagementService {
    fn certificate_request<T: Payload>(
        &self,
        method: &str,
        certificate_blob: &str,
        input: T,
    ) -> Result<String, WsmanError> {
        if certificate_blob.is_empty() {
            return Err(WsmanError::invalid_argument("certificate blob is empty"));
        }
        let header = self.base.header(&self.base.method_action(method), None);
        let body = self.base.creator().create_body(
            &format!("{}_INPUT", method),
            Self::CLASS_NAME,
            Some(input),
        )?;
        Ok(self.base.envelope(&header, &body))
    }

    /// `AddCertificate` : importe un certificat client (DER encodé en base64)
    pub fn add_certificate(&self, certificate_blob: &str) -> Result<String, WsmanError> {
        let input = AddCertificateInput {
            certificate_blob: certificate_blob.to_string(),
            ..Default::default()
        };
        self.certificate_request("AddCertificate", certificate_blob, input)
    }

    /// `AddTrustedRootCertificate` : importe un certificat racine de confiance
    pub fn add_trusted_root_certificate(&self, certificate_blob: &str) -> Result<String, WsmanError> {
        let input = AddTrustedRootCertificateInput {
            certificate_blob: certificate_blob.to_string(),
            ..Default::default()
        };
        self.certificate_request("AddTrustedRootCertificate", certificate_blob, input)
    }

    /// `GeneratePKCS10RequestEx` : signe une requête de certificat avec une paire de clés du firmware
    pub fn generate_pkcs10_request_ex(
        &self,
        key_pair: &str,
        null_signed_certificate_request: &str,
        signing_algorithm: SigningAlgorithm,
    ) -> Result<String, WsmanError> {
        let mut input = namespaced(
            "h:GeneratePKCS10RequestEx_INPUT",
            "h",
            &self.base.resource_uri(),
        );
        push(
            &mut input,
            endpoint_reference(
                "h:KeyPair",
                self.base.creator().destination(),
                &self.base.creator().resource_uri(PUBLIC_PRIVATE_KEY_PAIR),
                &[Selector::instance_id(key_pair)],
            ),
        );
        push(
            &mut input,
            element("h:SigningAlgorithm", (signing_algorithm as u32).to_string()),
        );
        push(
            &mut input,
            element("h:NullSignedCertificateRequest", null_signed_certificate_request),
        );

        let header = self
            .base
            .header(&self.base.method_action("GeneratePKCS10RequestEx"), None);
        let body = self.base.creator().create_body_from_element(&input)?;
        Ok(self.base.envelope(&header, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsmcore::{MessageCreator, actions::schema};

    fn service() -> PublicKeyManagementService {
        PublicKeyManagementService::new(MessageCreator::new(schema::AMT))
    }

    #[test]
    fn test_add_trusted_root_certificate() {
        let xml = service().add_trusted_root_certificate("MIIEOzCCAyOgAwIBAgIJ").unwrap();
        assert!(xml.contains(
            "<a:Action>http://intel.com/wbem/wscim/1/amt-schema/1/AMT_PublicKeyManagementService/AddTrustedRootCertificate</a:Action>"
        ));
        assert!(xml.contains(concat!(
            r#"<Body><h:AddTrustedRootCertificate_INPUT xmlns:h="http://intel.com/wbem/wscim/1/amt-schema/1/AMT_PublicKeyManagementService">"#,
            "<h:CertificateBlob>MIIEOzCCAyOgAwIBAgIJ</h:CertificateBlob>",
            "</h:AddTrustedRootCertificate_INPUT></Body>"
        )));
    }

    #[test]
    fn test_add_certificate_rejects_empty_blob() {
        let service = service();
        assert!(matches!(
            service.add_certificate(""),
            Err(WsmanError::InvalidArgument(_))
        ));
        // Aucun en-tête n'a été construit
        assert_eq!(service.base().creator().counter().peek(), 0);
    }

    #[test]
    fn test_generate_pkcs10_request_ex() {
        let xml = service()
            .generate_pkcs10_request_ex(
                "Intel(r) AMT Key: Handle: 0",
                "MIICnjCCAYYCAQAw",
                SigningAlgorithm::Sha256Rsa,
            )
            .unwrap();
        assert!(xml.contains(concat!(
            r#"<Body><h:GeneratePKCS10RequestEx_INPUT xmlns:h="http://intel.com/wbem/wscim/1/amt-schema/1/AMT_PublicKeyManagementService">"#,
            "<h:KeyPair><a:Address>/wsman</a:Address><a:ReferenceParameters>",
            "<w:ResourceURI>http://intel.com/wbem/wscim/1/amt-schema/1/AMT_PublicPrivateKeyPair</w:ResourceURI>",
            r#"<w:SelectorSet><w:Selector Name="InstanceID">Intel(r) AMT Key: Handle: 0</w:Selector></w:SelectorSet>"#,
            "</a:ReferenceParameters></h:KeyPair>",
            "<h:SigningAlgorithm>1</h:SigningAlgorithm>",
            "<h:NullSignedCertificateRequest>MIICnjCCAYYCAQAw</h:NullSignedCertificateRequest>",
            "</h:GeneratePKCS10RequestEx_INPUT></Body>"
        )));
    }
}
