//! Layer Model Data
//! Static reference data for the OSI and TCP/IP stacks plus lookup helpers

use eframe::egui::Color32;

use crate::i18n::Text;

#[cfg(test)]
mod tests;

/// Which stack a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Osi,
    TcpIp,
}

/// A well-known port (or protocol pairing) listed on a layer's detail page.
#[derive(Debug, Clone, Copy)]
pub struct PortEntry {
    pub number: &'static str,
    pub service: &'static str,
    pub desc: &'static str,
}

/// An external reading link shown under "References & Further Reading".
#[derive(Debug, Clone, Copy)]
pub struct RefLink {
    pub title: &'static str,
    pub url: &'static str,
}

/// One layer of either stack.
///
/// OSI layers leave `osi_mapping` empty and keep `span` at 1; TCP/IP layers
/// list the OSI ids they absorb (highest first) and span that many grid rows.
#[derive(Debug, Clone, Copy)]
pub struct Layer {
    pub id: u8,
    pub name: &'static str,
    pub pdu: &'static str,
    pub subtitle: Text,
    pub description: Text,
    pub details: Text,
    pub protocols: &'static [&'static str],
    pub color: Color32,
    pub icon: &'static str,
    pub ports: &'static [PortEntry],
    pub references: &'static [RefLink],
    pub osi_mapping: &'static [u8],
    pub span: u8,
}

impl Layer {
    /// True when the detail page should show the port table.
    pub fn has_ports(&self) -> bool {
        !self.ports.is_empty()
    }
}

pub fn osi_layers() -> &'static [Layer] {
    OSI_LAYERS
}

pub fn tcpip_layers() -> &'static [Layer] {
    TCP_IP_LAYERS
}

pub fn layers(kind: ModelKind) -> &'static [Layer] {
    match kind {
        ModelKind::Osi => OSI_LAYERS,
        ModelKind::TcpIp => TCP_IP_LAYERS,
    }
}

pub fn osi_layer(id: u8) -> Option<&'static Layer> {
    OSI_LAYERS.iter().find(|l| l.id == id)
}

pub fn tcpip_layer(id: u8) -> Option<&'static Layer> {
    TCP_IP_LAYERS.iter().find(|l| l.id == id)
}

pub fn layer(kind: ModelKind, id: u8) -> Option<&'static Layer> {
    layers(kind).iter().find(|l| l.id == id)
}

/// The TCP/IP layer that absorbs a given OSI layer.
pub fn tcpip_layer_for_osi(osi_id: u8) -> Option<&'static Layer> {
    TCP_IP_LAYERS.iter().find(|l| l.osi_mapping.contains(&osi_id))
}

/// Tooltip copy for a PDU badge.
pub fn pdu_description(pdu: &str) -> Option<&'static Text> {
    PDU_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == pdu)
        .map(|(_, text)| text)
}

/// Token fill while the packet sits on a given OSI layer during simulation.
///
/// Matches the card palette except L1, which swaps the dark violet for a
/// light grey so the token stays readable against the stage background.
pub fn sim_layer_color(osi_id: u8) -> Color32 {
    if osi_id == 1 {
        Color32::from_rgb(0xE0, 0xE0, 0xE0)
    } else {
        osi_layer(osi_id).map(|l| l.color).unwrap_or(Color32::GRAY)
    }
}

/// Sanity-check the static tables. Collects every problem found rather than
/// stopping at the first.
pub fn validate() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if OSI_LAYERS.len() != 7 {
        errors.push(format!("expected 7 OSI layers, found {}", OSI_LAYERS.len()));
    }
    if TCP_IP_LAYERS.len() != 4 {
        errors.push(format!(
            "expected 4 TCP/IP layers, found {}",
            TCP_IP_LAYERS.len()
        ));
    }

    for (index, layer) in OSI_LAYERS.iter().enumerate() {
        let expected = 7 - index as u8;
        if layer.id != expected {
            errors.push(format!(
                "OSI layer at position {index} has id {} (expected {expected})",
                layer.id
            ));
        }
        if !layer.osi_mapping.is_empty() {
            errors.push(format!("OSI layer {} carries an osi_mapping", layer.id));
        }
        if layer.span != 1 {
            errors.push(format!("OSI layer {} has span {}", layer.id, layer.span));
        }
    }

    let mut covered = Vec::new();
    for layer in TCP_IP_LAYERS {
        if layer.osi_mapping.is_empty() {
            errors.push(format!("TCP/IP layer {} maps to no OSI layer", layer.id));
        }
        if layer.span as usize != layer.osi_mapping.len() {
            errors.push(format!(
                "TCP/IP layer {} spans {} rows but maps {} OSI layers",
                layer.id,
                layer.span,
                layer.osi_mapping.len()
            ));
        }
        for osi_id in layer.osi_mapping {
            if covered.contains(osi_id) {
                errors.push(format!("OSI layer {osi_id} mapped twice"));
            }
            covered.push(*osi_id);
        }
    }
    for osi_id in 1..=7u8 {
        if !covered.contains(&osi_id) {
            errors.push(format!("OSI layer {osi_id} not mapped by any TCP/IP layer"));
        }
    }

    for layer in OSI_LAYERS.iter().chain(TCP_IP_LAYERS) {
        if pdu_description(layer.pdu).is_none() {
            errors.push(format!(
                "layer {} uses PDU {:?} with no description",
                layer.id, layer.pdu
            ));
        }
        if layer.protocols.is_empty() {
            errors.push(format!("layer {} lists no protocols", layer.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

const PDU_DESCRIPTIONS: &[(&str, Text)] = &[
    (
        "Data",
        Text { id: "Data mentah dari aplikasi.", en: "Raw data from application." },
    ),
    (
        "Segments",
        Text { id: "Data dipecah & diberi port.", en: "Data segmented & ported." },
    ),
    (
        "Packets",
        Text { id: "Ditambah IP Source/Dest.", en: "IP Source/Dest added." },
    ),
    (
        "Frames",
        Text { id: "Ditambah MAC & Error Check.", en: "MAC & Error Check added." },
    ),
    (
        "Bits",
        Text { id: "Sinyal fisik (0/1).", en: "Physical signals (0/1)." },
    ),
    (
        "Frames & Bits",
        Text { id: "Gabungan L1 & L2.", en: "Combined L1 & L2." },
    ),
];

const OSI_LAYERS: &[Layer] = &[
    Layer {
        id: 7,
        name: "Application",
        pdu: "Data",
        subtitle: Text {
            id: "Proses Jaringan ke Aplikasi",
            en: "Network Process to Application",
        },
        description: Text {
            id: "Layer ini menyediakan antarmuka bagi aplikasi pengguna untuk mengakses layanan jaringan. Ini adalah layer yang paling dekat dengan pengguna.",
            en: "This layer provides the interface for user applications to access network services. It is the layer closest to the user.",
        },
        details: Text {
            id: "Layer 7 bertanggung jawab atas identifikasi mitra komunikasi, penentuan ketersediaan sumber daya, dan sinkronisasi komunikasi.",
            en: "Layer 7 is responsible for identifying communication partners, determining resource availability, and synchronizing communication.",
        },
        protocols: &["HTTP", "HTTPS", "FTP", "SMTP", "DNS", "SSH"],
        color: Color32::from_rgb(0xFF, 0x6B, 0x6B),
        icon: "🖥️",
        ports: &[
            PortEntry { number: "80", service: "HTTP", desc: "Web Traffic (Unsecured)" },
            PortEntry { number: "443", service: "HTTPS", desc: "Web Traffic (Secured)" },
            PortEntry { number: "53", service: "DNS", desc: "Domain Name System" },
            PortEntry { number: "22", service: "SSH", desc: "Secure Shell" },
        ],
        references: &[
            RefLink {
                title: "OSI Application Layer - GeeksforGeeks",
                url: "https://www.geeksforgeeks.org/application-layer-in-osi-model/",
            },
            RefLink {
                title: "What is the Application Layer? - Cloudflare",
                url: "https://www.cloudflare.com/learning/ddos/glossary/osi-model/",
            },
            RefLink {
                title: "Hypertext Transfer Protocol (HTTP) - MDN",
                url: "https://developer.mozilla.org/en-US/docs/Web/HTTP",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
    Layer {
        id: 6,
        name: "Presentation",
        pdu: "Data",
        subtitle: Text {
            id: "Representasi & Enkripsi Data",
            en: "Data Representation & Encryption",
        },
        description: Text {
            id: "Bertanggung jawab untuk memastikan data dapat dibaca oleh sistem penerima. Melakukan translate, enkripsi, dan kompresi data.",
            en: "Responsible for ensuring data is readable by the receiving system. Handles translation, encryption, and compression.",
        },
        details: Text {
            id: "Layer ini menerjemahkan data antara format aplikasi dan jaringan. Contohnya konversi ASCII ke EBCDIC, atau enkripsi SSL/TLS.",
            en: "This layer translates data between application and network formats. Examples include ASCII to EBCDIC conversion, or SSL/TLS encryption.",
        },
        protocols: &["SSL", "TLS", "JPEG", "MPEG", "ASCII"],
        color: Color32::from_rgb(0x4E, 0xCD, 0xC4),
        icon: "🔐",
        ports: &[],
        references: &[
            RefLink {
                title: "Presentation Layer in OSI Model",
                url: "https://www.geeksforgeeks.org/presentation-layer-in-osi-model/",
            },
            RefLink {
                title: "Transport Layer Security (TLS) - Wikipedia",
                url: "https://en.wikipedia.org/wiki/Transport_Layer_Security",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
    Layer {
        id: 5,
        name: "Session",
        pdu: "Data",
        subtitle: Text {
            id: "Komunikasi Antar Host",
            en: "Interhost Communication",
        },
        description: Text {
            id: "Mengelola, memelihara, dan menghentikan sesi komunikasi antar aplikasi.",
            en: "Manages, maintains, and terminates communication sessions between applications.",
        },
        details: Text {
            id: "Layer ini mengontrol dialog antar komputer. Ia menetapkan, mengelola, dan memutuskan koneksi antara aplikasi lokal dan remote.",
            en: "This layer controls dialogues between computers. It establishes, manages, and terminates connections between local and remote applications.",
        },
        protocols: &["NetBIOS", "RPC", "SQL"],
        color: Color32::from_rgb(0x45, 0xB7, 0xD1),
        icon: "🤝",
        ports: &[],
        references: &[
            RefLink {
                title: "Session Layer in OSI Model",
                url: "https://www.geeksforgeeks.org/session-layer-in-osi-model/",
            },
            RefLink {
                title: "Remote Procedure Call (RPC)",
                url: "https://en.wikipedia.org/wiki/Remote_procedure_call",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
    Layer {
        id: 4,
        name: "Transport",
        pdu: "Segments",
        subtitle: Text {
            id: "Koneksi End-to-End",
            en: "End-to-End Connections",
        },
        description: Text {
            id: "Menyediakan transfer data yang transparan antara end system, bertanggung jawab untuk error recovery dan flow control.",
            en: "Provides transparent data transfer between end systems, responsible for error recovery and flow control.",
        },
        details: Text {
            id: "Layer ini memecah data menjadi segmen. Protokol utamanya adalah TCP (reliable) dan UDP (unreliable/cepat).",
            en: "This layer breaks data into segments. Main protocols are TCP (reliable) and UDP (unreliable/fast).",
        },
        protocols: &["TCP", "UDP"],
        color: Color32::from_rgb(0x96, 0xCE, 0xB4),
        icon: "🚚",
        ports: &[
            PortEntry {
                number: "TCP",
                service: "Connection Oriented",
                desc: "Reliable, ordered delivery",
            },
            PortEntry {
                number: "UDP",
                service: "Connectionless",
                desc: "Unreliable, fast delivery (Streaming/Gaming)",
            },
        ],
        references: &[
            RefLink {
                title: "Transport Layer in OSI Model",
                url: "https://www.geeksforgeeks.org/transport-layer-in-osi-model/",
            },
            RefLink {
                title: "TCP vs UDP (GeeksforGeeks)",
                url: "https://www.geeksforgeeks.org/differences-between-tcp-and-udp/",
            },
            RefLink {
                title: "Transmission Control Protocol - Wikipedia",
                url: "https://en.wikipedia.org/wiki/Transmission_Control_Protocol",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
    Layer {
        id: 3,
        name: "Network",
        pdu: "Packets",
        subtitle: Text {
            id: "Penentuan Jalur & Pengalamatan Logis",
            en: "Path Determination & Logical Addressing",
        },
        description: Text {
            id: "Menentukan jalur terbaik untuk memindahkan data dari satu jaringan ke jaringan lain (Routing).",
            en: "Determines the best path to move data from one network to another (Routing).",
        },
        details: Text {
            id: "Layer ini menggunakan alamat logis (IP Address) untuk merutekan paket data melewati jaringan yang berbeda.",
            en: "This layer uses logical addressing (IP Addresses) to route data packets across different networks.",
        },
        protocols: &["IP", "ICMP", "IGMP", "IPsec"],
        color: Color32::from_rgb(0xFF, 0xEE, 0xAD),
        icon: "🌐",
        ports: &[],
        references: &[
            RefLink {
                title: "Network Layer in OSI Model",
                url: "https://www.geeksforgeeks.org/network-layer-in-osi-model/",
            },
            RefLink {
                title: "Internet Protocol (IP) - Wikipedia",
                url: "https://en.wikipedia.org/wiki/Internet_Protocol",
            },
            RefLink {
                title: "What is Routing? - Cloudflare",
                url: "https://www.cloudflare.com/learning/network-layer/what-is-routing/",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
    Layer {
        id: 2,
        name: "Data Link",
        pdu: "Frames",
        subtitle: Text {
            id: "Pengalamatan Fisik",
            en: "Physical Addressing",
        },
        description: Text {
            id: "Menyediakan transfer data node-to-node (hop-to-hop) dan menangani error pada physical layer.",
            en: "Provides node-to-node (hop-to-hop) data transfer and handles errors in the physical layer.",
        },
        details: Text {
            id: "Layer ini bekerja dengan frame dan MAC Address. Terdiri dari sub-layer LLC (Logical Link Control) dan MAC (Media Access Control).",
            en: "This layer works with frames and MAC Addresses. Consists of LLC (Logical Link Control) and MAC (Media Access Control) sub-layers.",
        },
        protocols: &["Ethernet", "PPP", "Switching", "VLAN"],
        color: Color32::from_rgb(0xD4, 0xA5, 0xA5),
        icon: "🔗",
        ports: &[],
        references: &[
            RefLink {
                title: "Data Link Layer in OSI Model",
                url: "https://www.geeksforgeeks.org/data-link-layer-in-osi-model/",
            },
            RefLink {
                title: "What is a MAC Address?",
                url: "https://www.geeksforgeeks.org/mac-address-in-computer-network/",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
    Layer {
        id: 1,
        name: "Physical",
        pdu: "Bits",
        subtitle: Text {
            id: "Media, Sinyal, & Transmisi Biner",
            en: "Media, Signal, & Binary Transmission",
        },
        description: Text {
            id: "Transmisi bit stream mentah melalui media fisik.",
            en: "Transmission of raw bit streams over physical media.",
        },
        details: Text {
            id: "Berurusan dengan kabel, tegangan listik, pin, repeater, dan hub. Mengubah bit menjadi sinyal listrik, cahaya, atau radio.",
            en: "Deals with cables, voltages, pins, repeaters, and hubs. Converts bits into electrical, light, or radio signals.",
        },
        protocols: &["Cables", "Hubs", "Repeaters", "Fiber"],
        color: Color32::from_rgb(0x9B, 0x59, 0xB6),
        icon: "🔌",
        ports: &[],
        references: &[
            RefLink {
                title: "Physical Layer in OSI Model",
                url: "https://www.geeksforgeeks.org/physical-layer-in-osi-model/",
            },
            RefLink {
                title: "Introduction to Networking Cable",
                url: "https://en.wikipedia.org/wiki/Networking_cables",
            },
        ],
        osi_mapping: &[],
        span: 1,
    },
];

const TCP_IP_LAYERS: &[Layer] = &[
    Layer {
        id: 4,
        name: "Application",
        pdu: "Data",
        subtitle: Text {
            id: "Komunikasi Proses-ke-Proses",
            en: "Process-to-Process Communication",
        },
        description: Text {
            id: "Menggabungkan fungsi OSI Application, Presentation, dan Session.",
            en: "Combines OSI Application, Presentation, and Session functions.",
        },
        details: Text {
            id: "Dalam model TCP/IP, layer ini menangani protokol tingkat tinggi, representasi data, dan kontrol sesi sekaligus. Ini adalah antarmuka utama bagi data pengguna.",
            en: "In the TCP/IP model, this layer handles high-level protocols, data representation, and session control simultaneously. It is the main interface for user data.",
        },
        protocols: &["HTTP", "DNS", "SSH", "FTP"],
        color: Color32::from_rgb(0xFF, 0x6B, 0x6B),
        icon: "🖥️",
        ports: &[],
        references: &[],
        osi_mapping: &[7, 6, 5],
        span: 3,
    },
    Layer {
        id: 3,
        name: "Transport",
        pdu: "Segments",
        subtitle: Text {
            id: "Komunikasi Host-ke-Host",
            en: "Host-to-Host Communication",
        },
        description: Text {
            id: "Sama dengan OSI Transport Layer.",
            en: "Same as the OSI Transport Layer.",
        },
        details: Text {
            id: "Menyediakan layanan pengiriman data yang andal (TCP) atau cepat (UDP) antar aplikasi di host yang berbeda. Mengatur flow control dan error checking.",
            en: "Provides reliable (TCP) or fast (UDP) data delivery services between applications on different hosts. Manages flow control and error checking.",
        },
        protocols: &["TCP", "UDP"],
        color: Color32::from_rgb(0x96, 0xCE, 0xB4),
        icon: "🚚",
        ports: &[],
        references: &[],
        osi_mapping: &[4],
        span: 1,
    },
    Layer {
        id: 2,
        name: "Internet",
        pdu: "Packets",
        subtitle: Text {
            id: "Internetworking & Routing",
            en: "Internetworking & Routing",
        },
        description: Text {
            id: "Setara dengan OSI Network Layer.",
            en: "Equivalent to the OSI Network Layer.",
        },
        details: Text {
            id: "Bertanggung jawab untuk merutekan paket data ke tujuan yang benar melintasi berbagai jaringan (Internetwork). Menggunakan IP Address.",
            en: "Responsible for routing data packets to the correct destination across various networks (Internetwork). Uses IP Addresses.",
        },
        protocols: &["IP", "ICMP", "ARP"],
        color: Color32::from_rgb(0xFF, 0xEE, 0xAD),
        icon: "🌐",
        ports: &[],
        references: &[],
        osi_mapping: &[3],
        span: 1,
    },
    Layer {
        id: 1,
        name: "Network Access",
        pdu: "Frames & Bits",
        subtitle: Text {
            id: "Pengalamatan Fisik & Transmisi",
            en: "Physical Addressing & Transmission",
        },
        description: Text {
            id: "Menggabungkan fungsi OSI Data Link dan Physical Layer.",
            en: "Combines OSI Data Link and Physical Layer functions.",
        },
        details: Text {
            id: "Layer ini tidak hanya menangani pengalamatan fisik (MAC) dan framing, tetapi juga mendefinisikan karakteristik media transmisi, sinyal, dan encoding biner. Ini adalah jembatan antara perangkat lunak jaringan dan perangkat keras fisik.",
            en: "This layer not only handles physical addressing (MAC) and framing but also defines transmission media characteristics, signals, and binary encoding. It's the bridge between network software and physical hardware.",
        },
        protocols: &["Ethernet", "Wi-Fi", "Fiber", "PPP"],
        color: Color32::from_rgb(0xD4, 0xA5, 0xA5),
        icon: "🔌🔗",
        ports: &[],
        references: &[
            RefLink {
                title: "TCP/IP Network Access Layer",
                url: "https://www.geeksforgeeks.org/tcp-ip-model/",
            },
            RefLink {
                title: "Ethernet Protocol",
                url: "https://en.wikipedia.org/wiki/Ethernet",
            },
        ],
        osi_mapping: &[2, 1],
        span: 2,
    },
];
