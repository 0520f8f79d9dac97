use crate::dns::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use leasedns_application::use_cases::ResolveHostUseCase;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Answers address queries from the lease registry.
///
/// Only single-question standard queries get a response. Names the registry
/// does not hold, and non-address query types, are answered with NXDOMAIN.
/// Answers carry TTL 0 so resolvers downstream never cache a lease.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveHostUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveHostUseCase>) -> Self {
        Self { use_case }
    }

    fn normalize_domain(domain: &str) -> String {
        domain.trim_end_matches('.').to_string()
    }

    /// Decodes a datagram and returns the encoded reply, or `None` when the
    /// query is dropped.
    pub async fn handle_datagram(&self, buf: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(buf) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, bytes = buf.len(), "Dropping undecodable DNS datagram");
                return None;
            }
        };

        let response = self.handle_message(&request).await?;

        match response.to_vec() {
            Ok(wire) => Some(wire),
            Err(e) => {
                error!(error = %e, id = request.id(), "Failed to encode DNS response");
                None
            }
        }
    }

    pub async fn handle_message(&self, request: &Message) -> Option<Message> {
        if request.message_type() != MessageType::Query || request.op_code() != OpCode::Query {
            debug!(
                id = request.id(),
                message_type = ?request.message_type(),
                op_code = ?request.op_code(),
                "Dropping non-query DNS message"
            );
            return None;
        }

        let [query] = request.queries() else {
            debug!(
                id = request.id(),
                questions = request.queries().len(),
                "Dropping DNS query without exactly one question"
            );
            return None;
        };

        let domain = query.name().to_utf8();
        let hostname = Self::normalize_domain(&domain);
        let record_type = query.query_type();

        debug!(domain = %domain, record_type = ?record_type, "DNS query received");

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_authoritative(true)
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(false);
        response.add_query(query.clone());

        if let Some(family) = RecordTypeMapper::to_family(record_type) {
            for ip in self.use_case.execute(&hostname, family).await {
                info!(domain = %domain, ip = %ip, "DNS answer");
                response.add_answer(Record::from_rdata(
                    query.name().clone(),
                    0,
                    RecordTypeMapper::to_rdata(ip),
                ));
            }
        }

        if response.answers().is_empty() {
            info!(domain = %domain, record_type = ?record_type, "DNS NXDOMAIN");
            response.set_response_code(ResponseCode::NXDomain);
        }

        Some(response)
    }
}
