use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

/// Builds a BOOTP/DHCP payload: fixed header, magic cookie, options, END.
pub struct DhcpPayloadBuilder {
    op: u8,
    chaddr: Vec<u8>,
    yiaddr: Ipv4Addr,
    options: Vec<u8>,
    cookie: [u8; 4],
    terminate: bool,
}

impl DhcpPayloadBuilder {
    pub fn new() -> Self {
        Self {
            op: 1,
            chaddr: vec![0x02, 0x00, 0x00, 0x00, 0x00, 0x01],
            yiaddr: Ipv4Addr::UNSPECIFIED,
            options: Vec::new(),
            cookie: MAGIC_COOKIE,
            terminate: true,
        }
    }

    pub fn request() -> Self {
        Self::new().message_type(3)
    }

    pub fn ack(yiaddr: Ipv4Addr) -> Self {
        let mut builder = Self::new().message_type(5);
        builder.op = 2;
        builder.yiaddr = yiaddr;
        builder
    }

    pub fn chaddr(mut self, chaddr: &[u8]) -> Self {
        self.chaddr = chaddr.to_vec();
        self
    }

    pub fn message_type(self, value: u8) -> Self {
        self.option(53, &[value])
    }

    pub fn hostname(self, name: &str) -> Self {
        self.option(12, name.as_bytes())
    }

    pub fn option(mut self, code: u8, data: &[u8]) -> Self {
        self.options.push(code);
        self.options.push(data.len() as u8);
        self.options.extend_from_slice(data);
        self
    }

    pub fn raw_options(mut self, bytes: &[u8]) -> Self {
        self.options.extend_from_slice(bytes);
        self
    }

    pub fn cookie(mut self, cookie: [u8; 4]) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn without_end(mut self) -> Self {
        self.terminate = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut payload = vec![0u8; 236];
        payload[0] = self.op;
        payload[1] = 1;
        payload[2] = self.chaddr.len() as u8;
        payload[16..20].copy_from_slice(&self.yiaddr.octets());
        let chaddr_len = self.chaddr.len().min(16);
        payload[28..28 + chaddr_len].copy_from_slice(&self.chaddr[..chaddr_len]);
        payload.extend_from_slice(&self.cookie);
        payload.extend_from_slice(&self.options);
        if self.terminate {
            payload.push(255);
        }
        payload
    }
}

/// Wraps a UDP payload in IPv4 and link-layer headers.
pub struct FrameBuilder;

impl FrameBuilder {
    pub fn ipv4_udp(src_port: u16, dst_port: u16, payload: &[u8]) -> Vec<u8> {
        let udp_len = 8 + payload.len();
        let total_len = 20 + udp_len;

        let mut packet = Vec::with_capacity(total_len);
        packet.extend_from_slice(&[0x45, 0x00]);
        packet.extend_from_slice(&(total_len as u16).to_be_bytes());
        packet.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        packet.extend_from_slice(&[64, 17, 0x00, 0x00]);
        packet.extend_from_slice(&[0, 0, 0, 0]);
        packet.extend_from_slice(&[255, 255, 255, 255]);

        packet.extend_from_slice(&src_port.to_be_bytes());
        packet.extend_from_slice(&dst_port.to_be_bytes());
        packet.extend_from_slice(&(udp_len as u16).to_be_bytes());
        packet.extend_from_slice(&[0x00, 0x00]);
        packet.extend_from_slice(payload);
        packet
    }

    pub fn ethernet(ip_packet: &[u8]) -> Vec<u8> {
        Self::ethernet_tagged(ip_packet, &[])
    }

    /// Ethernet frame with the given 802.1Q / 802.1ad tag TPIDs, outermost first.
    pub fn ethernet_tagged(ip_packet: &[u8], tpids: &[u16]) -> Vec<u8> {
        let mut frame = vec![0xFF; 6];
        frame.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
        for (i, tpid) in tpids.iter().enumerate() {
            frame.extend_from_slice(&tpid.to_be_bytes());
            frame.extend_from_slice(&(100 + i as u16).to_be_bytes());
        }
        frame.extend_from_slice(&0x0800u16.to_be_bytes());
        frame.extend_from_slice(ip_packet);
        frame
    }

    pub fn linux_sll(ip_packet: &[u8]) -> Vec<u8> {
        let mut frame = vec![0x00, 0x00, 0x00, 0x01, 0x00, 0x06];
        frame.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00]);
        frame.extend_from_slice(&0x0800u16.to_be_bytes());
        frame.extend_from_slice(ip_packet);
        frame
    }
}

pub struct QueryBuilder;

impl QueryBuilder {
    pub fn query(name: &str, record_type: RecordType) -> Message {
        Self::multi_query(&[(name, record_type)])
    }

    pub fn multi_query(questions: &[(&str, RecordType)]) -> Message {
        let mut message = Message::new();
        message
            .set_id(0x1234)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        for (name, record_type) in questions {
            let name = Name::from_str(name).unwrap();
            message.add_query(Query::query(name, *record_type));
        }
        message
    }

    pub fn bytes(message: &Message) -> Vec<u8> {
        message.to_vec().unwrap()
    }
}
