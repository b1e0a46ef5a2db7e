//! Protocol Encyclopedia
//! Per-protocol descriptions, security risks, and hardening notes backing the
//! protocol modal

use crate::i18n::Text;
use crate::model::RefLink;

#[cfg(test)]
mod tests;

/// A named security risk or mitigation shown in the modal.
#[derive(Debug, Clone, Copy)]
pub struct SecurityNote {
    pub title: &'static str,
    pub desc: Text,
}

/// Everything the protocol modal shows for one protocol tag.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolInfo {
    pub tag: &'static str,
    pub full_name: &'static str,
    pub description: Text,
    pub use_cases: Option<Text>,
    pub risks: &'static [SecurityNote],
    pub mitigations: &'static [SecurityNote],
    pub references: &'static [RefLink],
}

/// Look up a protocol by the tag printed on a layer card chip.
pub fn lookup(tag: &str) -> Option<&'static ProtocolInfo> {
    PROTOCOLS.iter().find(|p| p.tag == tag)
}

pub fn all() -> &'static [ProtocolInfo] {
    PROTOCOLS
}

const NO_NOTES: &[SecurityNote] = &[];
const NO_REFS: &[RefLink] = &[];

const PROTOCOLS: &[ProtocolInfo] = &[
    ProtocolInfo {
        tag: "HTTP",
        full_name: "Hypertext Transfer Protocol",
        description: Text {
            id: "Protokol standar untuk mentransfer dokumen web (seperti HTML) di internet. HTTP bekerja dengan model request-response antara klien (browser) dan server.",
            en: "Standard protocol for transferring web documents (like HTML) on the internet. HTTP works on a request-response model between client (browser) and server.",
        },
        use_cases: Some(Text {
            id: "Browsing website, API (REST/SOAP), download file sederhana.",
            en: "Website browsing, APIs (REST/SOAP), simple file downloads.",
        }),
        risks: &[
            SecurityNote {
                title: "Clear Text Transmission",
                desc: Text {
                    id: "Data dikirim tanpa enkripsi, rentan terhadap penyadapan (Eavesdropping/Sniffing).",
                    en: "Data sent unencrypted, vulnerable to eavesdropping/sniffing.",
                },
            },
            SecurityNote {
                title: "Man-in-the-Middle (MitM)",
                desc: Text {
                    id: "Penyerang dapat memotong dan memodifikasi data di tengah jalan.",
                    en: "Attackers can intercept and modify data in transit.",
                },
            },
            SecurityNote {
                title: "XSS & CSRF",
                desc: Text {
                    id: "Serangan injeksi kode pada aplikasi web yang berjalan di atas HTTP.",
                    en: "Code injection attacks on web applications running over HTTP.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "Gunakan HTTPS",
                desc: Text {
                    id: "Wajib beralih ke HTTPS untuk mengenkripsi trafik menggunakan TLS/SSL.",
                    en: "Must switch to HTTPS to encrypt traffic using TLS/SSL.",
                },
            },
            SecurityNote {
                title: "HSTS",
                desc: Text {
                    id: "HTTP Strict Transport Security memaksa browser hanya menggunakan koneksi aman.",
                    en: "HTTP Strict Transport Security forces browsers to use only secure connections.",
                },
            },
        ],
        references: &[
            RefLink {
                title: "MDN Web Docs - HTTP",
                url: "https://developer.mozilla.org/en-US/docs/Web/HTTP",
            },
            RefLink {
                title: "OWASP Top 10",
                url: "https://owasp.org/www-project-top-ten/",
            },
        ],
    },
    ProtocolInfo {
        tag: "HTTPS",
        full_name: "Hypertext Transfer Protocol Secure",
        description: Text {
            id: "Versi aman dari HTTP yang menggunakan SSL/TLS untuk mengenkripsi komunikasi antara klien dan server.",
            en: "Secure version of HTTP that uses SSL/TLS to encrypt communication between client and server.",
        },
        use_cases: Some(Text {
            id: "E-commerce, Perbankan Online, Login Page, semua website modern.",
            en: "E-commerce, Online Banking, Login Pages, all modern websites.",
        }),
        risks: &[
            SecurityNote {
                title: "SSL Stripping",
                desc: Text {
                    id: "Penyerang memaksa downgrade koneksi dari HTTPS ke HTTP.",
                    en: "Attacker forces connection downgrade from HTTPS to HTTP.",
                },
            },
            SecurityNote {
                title: "Expired/Fake Certificates",
                desc: Text {
                    id: "Sertifikat yang tidak valid dapat menipu pengguna (Phishing).",
                    en: "Invalid certificates can deceive users (Phishing).",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "Certificate Pinning",
                desc: Text {
                    id: "Memastikan aplikasi hanya menerima sertifikat spesifik.",
                    en: "Ensures the application only accepts specific certificates.",
                },
            },
            SecurityNote {
                title: "TLS 1.3",
                desc: Text {
                    id: "Gunakan versi TLS terbaru yang lebih aman dan cepat.",
                    en: "Use the latest TLS version for better security and speed.",
                },
            },
        ],
        references: &[RefLink {
            title: "Why HTTPS Matters - Google",
            url: "https://developers.google.com/web/fundamentals/security/encrypt-in-transit/why-https",
        }],
    },
    ProtocolInfo {
        tag: "FTP",
        full_name: "File Transfer Protocol",
        description: Text {
            id: "Protokol standar untuk mengirimkan file komputer antar mesin dalam sebuah jaringan.",
            en: "Standard protocol for transmitting computer files between machines on a network.",
        },
        use_cases: Some(Text {
            id: "Upload file ke web hosting, sharing file di kantor lama.",
            en: "Uploading files to web hosting, file sharing in legacy office setups.",
        }),
        risks: &[
            SecurityNote {
                title: "No Encryption",
                desc: Text {
                    id: "Username dan password dikirim dalam bentuk teks polos (Clear Text).",
                    en: "Username and password sent in clear text.",
                },
            },
            SecurityNote {
                title: "Brute Force",
                desc: Text {
                    id: "Serangan menebak password secara terus menerus.",
                    en: "Continuous password guessing attacks.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "Gunakan FTPS/SFTP",
                desc: Text {
                    id: "SFTP (SSH File Transfer Protocol) jauh lebih aman karena terenkripsi penuh.",
                    en: "SFTP is much safer due to full encryption.",
                },
            },
            SecurityNote {
                title: "Disable Anonymous Login",
                desc: Text {
                    id: "Jangan izinkan akses tanpa otentikasi.",
                    en: "Do not allow access without authentication.",
                },
            },
        ],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "SSH",
        full_name: "Secure Shell",
        description: Text {
            id: "Protokol jaringan kriptografi untuk mengoperasikan layanan jaringan secara aman di atas jaringan yang tidak aman.",
            en: "Cryptographic network protocol for operating network services securely over an unsecured network.",
        },
        use_cases: Some(Text {
            id: "Remote login ke server, manajemen sistem jarak jauh, SFTP.",
            en: "Remote server login, remote system management, SFTP.",
        }),
        risks: &[
            SecurityNote {
                title: "Brute Force Attacks",
                desc: Text {
                    id: "Sangat sering menjadi target bot untuk menebak password root.",
                    en: "Frequent target for bots guessing root passwords.",
                },
            },
            SecurityNote {
                title: "Key Leakage",
                desc: Text {
                    id: "Jika Private Key bocor, penyerang memiliki akses penuh.",
                    en: "If Private Key leaks, attackers have full access.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "Disable Root Login",
                desc: Text {
                    id: "Jangan izinkan login langsung sebagai root.",
                    en: "Do not allow direct root login.",
                },
            },
            SecurityNote {
                title: "Key-Based Auth",
                desc: Text {
                    id: "Gunakan SSH Key pairs dan matikan otentikasi password.",
                    en: "Use SSH Key pairs and disable password authentication.",
                },
            },
            SecurityNote {
                title: "Fail2Ban",
                desc: Text {
                    id: "Blokir IP yang gagal login berkali-kali.",
                    en: "Block IPs with multiple failed login attempts.",
                },
            },
        ],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "DNS",
        full_name: "Domain Name System",
        description: Text {
            id: "Sistem penamaan hierarkis yang menerjemahkan nama domain (google.com) menjadi alamat IP (142.250.x.x).",
            en: "Hierarchical naming system translating domain names (google.com) to IP addresses.",
        },
        use_cases: Some(Text {
            id: "Resolusi nama website, Email routing (MX Records).",
            en: "Website name resolution, Email routing (MX Records).",
        }),
        risks: &[
            SecurityNote {
                title: "DNS Spoofing/Poisoning",
                desc: Text {
                    id: "Memasukkan data palsu ke cache DNS resolver untuk mengalihkan trafik ke situs jahat.",
                    en: "Injecting fake data into DNS resolver cache to redirect traffic to malicious sites.",
                },
            },
            SecurityNote {
                title: "DNS Amplification DDoS",
                desc: Text {
                    id: "Menggunakan server DNS terbuka untuk membanjiri target dengan trafik besar.",
                    en: "Using open DNS servers to flood targets with massive traffic.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "DNSSEC",
                desc: Text {
                    id: "Menambahkan tanda tangan digital kriptografi ke rekaman DNS.",
                    en: "Adds cryptographic digital signatures to DNS records.",
                },
            },
            SecurityNote {
                title: "Limit Recursion",
                desc: Text {
                    id: "Konfigurasi server DNS untuk hanya melayani klien yang terpercaya.",
                    en: "Configure DNS server to only serve trusted clients.",
                },
            },
        ],
        references: &[RefLink {
            title: "What is DNS? - Cloudflare",
            url: "https://www.cloudflare.com/learning/dns/what-is-dns/",
        }],
    },
    ProtocolInfo {
        tag: "TCP",
        full_name: "Transmission Control Protocol",
        description: Text {
            id: "Protokol inti internet yang menjamin pengiriman data yang andal, berurutan, dan bebas error antara komputer.",
            en: "Core internet protocol ensuring reliable, ordered, and error-free data delivery between computers.",
        },
        use_cases: Some(Text {
            id: "Website (HTTP), Email (SMTP), Transfer File (FTP).",
            en: "Websites (HTTP), Email (SMTP), File Transfer (FTP).",
        }),
        risks: &[
            SecurityNote {
                title: "SYN Flood Attack",
                desc: Text {
                    id: "Mengirimkan banyak permintaan koneksi (SYN) tanpa menyelesaikannya (ACK) untuk menghabiskan resource server.",
                    en: "Sending many connection requests (SYN) without completing them (ACK) to exhaust server resources.",
                },
            },
            SecurityNote {
                title: "TCP Reset Attack",
                desc: Text {
                    id: "Memutuskan koneksi yang sedang berjalan dengan memalsukan paket RST.",
                    en: "Terminating active connections by forging RST packets.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "SYN Cookies",
                desc: Text {
                    id: "Mekanisme pertahanan server untuk mencegah alokasi memori pada permintaan SYN palsu.",
                    en: "Server defense mechanism to prevent memory allocation for fake SYN requests.",
                },
            },
            SecurityNote {
                title: "Firewall Filtering",
                desc: Text {
                    id: "Memfilter paket TCP yang tidak wajar.",
                    en: "Filter abnormal TCP packets.",
                },
            },
        ],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "UDP",
        full_name: "User Datagram Protocol",
        description: Text {
            id: "Protokol komunikasi connectionless yang mengutamakan kecepatan daripada keandalan. Tidak menjamin paket sampai atau berurutan.",
            en: "Connectionless communication protocol prioritizing speed over reliability. No guarantee of delivery or order.",
        },
        use_cases: Some(Text {
            id: "Streaming Video, Game Online, DNS, VoIP.",
            en: "Video Streaming, Online Gaming, DNS, VoIP.",
        }),
        risks: &[
            SecurityNote {
                title: "UDP Flood",
                desc: Text {
                    id: "Serangan DDoS dengan membanjiri port random pada target dengan paket UDP.",
                    en: "DDoS attack flooding random ports on target with UDP packets.",
                },
            },
            SecurityNote {
                title: "Amplification Attacks",
                desc: Text {
                    id: "Memanfaatkan layanan UDP (NTP, DNS) untuk memantulkan trafik besar ke korban.",
                    en: "Exploiting UDP services (NTP, DNS) to reflect massive traffic to victims.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "Rate Limiting",
                desc: Text {
                    id: "Membatasi jumlah paket UDP yang diterima per detik.",
                    en: "Limit the number of UDP packets received per second.",
                },
            },
            SecurityNote {
                title: "DDoS Protection",
                desc: Text {
                    id: "Menggunakan layanan mitigasi DDoS (seperti Cloudflare/Akamai).",
                    en: "Use DDoS mitigation services (like Cloudflare/Akamai).",
                },
            },
        ],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "IP",
        full_name: "Internet Protocol",
        description: Text {
            id: "Protokol utama Network Layer yang bertanggung jawab untuk pengalamatan (Addressing) dan routing paket data.",
            en: "Principal Network Layer protocol responsible for addressing and routing data packets.",
        },
        use_cases: Some(Text {
            id: "Dasar dari seluruh komunikasi Internet (IPv4/IPv6).",
            en: "Foundation of all Internet communication (IPv4/IPv6).",
        }),
        risks: &[
            SecurityNote {
                title: "IP Spoofing",
                desc: Text {
                    id: "Memalsukan alamat IP pengirim untuk menyembunyikan identitas atau melakukan serangan DDoS.",
                    en: "Forging sender IP address to hide identity or conduct DDoS attacks.",
                },
            },
            SecurityNote {
                title: "Man-in-the-Middle",
                desc: Text {
                    id: "Tanpa enkripsi, paket IP mudah dibaca di tengah jalan.",
                    en: "Without encryption, IP packets are easily read in transit.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "IPsec",
                desc: Text {
                    id: "Suite protokol untuk mengamankan komunikasi IP dengan autentikasi dan enkripsi paket.",
                    en: "Protocol suite to secure IP communication with authentication and encryption.",
                },
            },
            SecurityNote {
                title: "Ingress Filtering",
                desc: Text {
                    id: "Memfilter paket dengan source IP yang tidak valid di router tepi.",
                    en: "Filter packets with invalid source IPs at edge routers.",
                },
            },
        ],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "SSL",
        full_name: "Secure Sockets Layer",
        description: Text {
            id: "Protokol keamanan usang (pendahulu TLS).",
            en: "Obsolete security protocol (predecessor to TLS).",
        },
        use_cases: Some(Text { id: "Legacy systems.", en: "Legacy systems." }),
        risks: &[SecurityNote {
            title: "POODLE Attack",
            desc: Text {
                id: "Vulnerability fatal pada SSLv3.",
                en: "Fatal vulnerability in SSLv3.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Disable SSL",
            desc: Text {
                id: "Gunakan TLS 1.2 atau 1.3 saja.",
                en: "Use TLS 1.2 or 1.3 only.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "TLS",
        full_name: "Transport Layer Security",
        description: Text {
            id: "Penerus SSL yang lebih aman.",
            en: "More secure successor to SSL.",
        },
        use_cases: Some(Text { id: "HTTPS, SMTPS, VPN.", en: "HTTPS, SMTPS, VPN." }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "SMTP",
        full_name: "Simple Mail Transfer Protocol",
        description: Text {
            id: "Standar pengiriman email.",
            en: "Standard for email transmission.",
        },
        use_cases: Some(Text { id: "Kirim Email.", en: "Sending Email." }),
        risks: &[SecurityNote {
            title: "Spam/Phishing",
            desc: Text {
                id: "Mudah dipalsukan pengirimnya.",
                en: "Sender easily spoofed.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "SPF, DKIM, DMARC",
            desc: Text {
                id: "Mekanisme verifikasi pengirim email.",
                en: "Email sender verification mechanisms.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Ethernet",
        full_name: "Ethernet",
        description: Text {
            id: "Teknologi standard untuk LAN kabel.",
            en: "Standard technology for wired LANs.",
        },
        use_cases: None,
        risks: &[SecurityNote {
            title: "ARP Spoofing",
            desc: Text {
                id: "Menipu mapping IP-to-MAC di jaringan lokal.",
                en: "Deceiving IP-to-MAC mapping in local network.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Dynamic ARP Inspection",
            desc: Text {
                id: "Fitur pada switch untuk memvalidasi paket ARP.",
                en: "Switch feature to validate ARP packets.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "VLAN",
        full_name: "Virtual LAN",
        description: Text {
            id: "Membagi satu jaringan fisik menjadi beberapa jaringan logis.",
            en: "Splits one physical network into multiple logical networks.",
        },
        use_cases: None,
        risks: &[SecurityNote {
            title: "VLAN Hopping",
            desc: Text {
                id: "Penyerang melompat ke VLAN lain yang seharusnya terisolasi.",
                en: "Attacker hops to another VLAN that should be isolated.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Disable DTP",
            desc: Text {
                id: "Matikan Dynamic Trunking Protocol pada port akses.",
                en: "Disable Dynamic Trunking Protocol on access ports.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "ICMP",
        full_name: "Internet Control Message Protocol",
        description: Text {
            id: "Protokol untuk diagnosa dan laporan error (misal: Ping, Traceroute).",
            en: "Protocol for diagnostics and error reporting (e.g., Ping, Traceroute).",
        },
        use_cases: Some(Text {
            id: "Ping, Network unreachable errors.",
            en: "Ping, Network unreachable errors.",
        }),
        risks: &[SecurityNote {
            title: "ICMP Flood",
            desc: Text { id: "DDoS Ping of Death.", en: "DDoS Ping of Death." },
        }],
        mitigations: &[SecurityNote {
            title: "Disable ICMP",
            desc: Text {
                id: "Blokir ICMP di firewall jika tidak perlu.",
                en: "Block ICMP on firewall if unnecessary.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "IGMP",
        full_name: "Internet Group Management Protocol",
        description: Text {
            id: "Mengelola keanggotaan grup untuk IP Multicast.",
            en: "Manages group membership for IP Multicast.",
        },
        use_cases: Some(Text {
            id: "IPTV, Streaming ke banyak klien.",
            en: "IPTV, Streaming to many clients.",
        }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "ARP",
        full_name: "Address Resolution Protocol",
        description: Text {
            id: "Menerjemahkan IP Address ke MAC Address.",
            en: "Resolves IP Addresses to MAC Addresses.",
        },
        use_cases: Some(Text {
            id: "Komunikasi dalam LAN.",
            en: "LAN communication.",
        }),
        risks: &[SecurityNote {
            title: "ARP Poisoning",
            desc: Text {
                id: "Attacker memalsukan respon ARP agar trafik korban melalui mesin attacker.",
                en: "Attacker fake ARP responses to route victim traffic through attacker machine.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Dynamic ARP Inspection",
            desc: Text {
                id: "Fitur switch untuk validasi ARP.",
                en: "Switch feature to validate ARP responses.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "IPsec",
        full_name: "Internet Protocol Security",
        description: Text {
            id: "Suite protokol untuk mengamankan komunikasi IP (VPN).",
            en: "Protocol suite for securing IP communication (VPN).",
        },
        use_cases: Some(Text {
            id: "Site-to-Site VPN, Remote Access VPN.",
            en: "Site-to-Site VPN, Remote Access VPN.",
        }),
        risks: &[SecurityNote {
            title: "Weak Crypto",
            desc: Text {
                id: "Menggunakan algoritma lama (DES/MD5).",
                en: "Using old algorithms (DES/MD5).",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Gunakan AES/SHA-2",
            desc: Text {
                id: "Standar enkripsi modern.",
                en: "Modern encryption standards (AES/SHA-2).",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Wi-Fi",
        full_name: "Wi-Fi (IEEE 802.11)",
        description: Text {
            id: "Teknologi jaringan nirkabel (Wireless LAN).",
            en: "Wireless LAN technology.",
        },
        use_cases: Some(Text {
            id: "Koneksi internet tanpa kabel.",
            en: "Wireless internet connection.",
        }),
        risks: &[
            SecurityNote {
                title: "Deauth Attack",
                desc: Text {
                    id: "Memutus koneksi klien secara paksa.",
                    en: "Forcibly disconnecting clients.",
                },
            },
            SecurityNote {
                title: "Evil Twin",
                desc: Text {
                    id: "Access Point palsu yang meniru SSID asli.",
                    en: "Fake Access Point mimicking original SSID.",
                },
            },
        ],
        mitigations: &[
            SecurityNote {
                title: "WPA3",
                desc: Text {
                    id: "Standar keamanan Wi-Fi terbaru.",
                    en: "Latest Wi-Fi security standard.",
                },
            },
            SecurityNote {
                title: "VPN",
                desc: Text {
                    id: "Gunakan VPN saat di Wi-Fi publik.",
                    en: "Use VPN on public Wi-Fi.",
                },
            },
        ],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "PPP",
        full_name: "Point-to-Point Protocol",
        description: Text {
            id: "Protokol layer 2 untuk komunikasi langsung antar dua node.",
            en: "Layer 2 protocol for direct communication between two nodes.",
        },
        use_cases: Some(Text {
            id: "Koneksi dial-up, serial link.",
            en: "Dial-up connections, serial links.",
        }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "NetBIOS",
        full_name: "Network Basic Input/Output System",
        description: Text {
            id: "API jaringan legacy untuk Windows.",
            en: "Legacy network API for Windows.",
        },
        use_cases: Some(Text {
            id: "File sharing (SMB) di jaringan lama.",
            en: "File sharing (SMB) on legacy networks.",
        }),
        risks: &[SecurityNote {
            title: "Enumeration",
            desc: Text {
                id: "Attacker bisa melihat daftar user/share.",
                en: "Attacker can enumerate users/shares.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Disable NetBIOS",
            desc: Text {
                id: "Matikan jika tidak diperlukan (gunakan DNS).",
                en: "Disable if not needed (use DNS).",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "RPC",
        full_name: "Remote Procedure Call",
        description: Text {
            id: "Mengizinkan program menjalankan kode di komputer lain.",
            en: "Allows programs to execute code on another computer.",
        },
        use_cases: Some(Text {
            id: "Manajemen sistem remote.",
            en: "Remote system management.",
        }),
        risks: &[SecurityNote {
            title: "Buffer Overflow",
            desc: Text {
                id: "Sering jadi target exploit (misal: Conficker).",
                en: "Frequent exploit target (e.g., Conficker).",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Firewall",
            desc: Text {
                id: "Batasi akses port RPC.",
                en: "Restrict RPC port access.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "SQL",
        full_name: "Structured Query Language",
        description: Text {
            id: "Bahasa standar untuk database relasional.",
            en: "Standard language for relational databases.",
        },
        use_cases: Some(Text {
            id: "Menyimpan data aplikasi.",
            en: "Storing application data.",
        }),
        risks: &[SecurityNote {
            title: "SQL Injection",
            desc: Text {
                id: "Memasukkan kode SQL berbahaya lewat input user.",
                en: "Injecting malicious SQL code via user input.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Prepared Statements",
            desc: Text {
                id: "Cara coding aman untuk mencegah injeksi.",
                en: "Secure coding to prevent injection.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "ASCII",
        full_name: "American Standard Code for Information Interchange",
        description: Text {
            id: "Standar encoding karakter teks.",
            en: "Character encoding standard for text.",
        },
        use_cases: Some(Text {
            id: "File teks, protokol berbasis teks (HTTP/SMTP).",
            en: "Text files, text-based protocols (HTTP/SMTP).",
        }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "JPEG",
        full_name: "JPEG Image",
        description: Text {
            id: "Format kompresi gambar lossy.",
            en: "Lossy image compression format.",
        },
        use_cases: Some(Text { id: "Foto web.", en: "Web photos." }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "MPEG",
        full_name: "MPEG Video",
        description: Text {
            id: "Standar coding audio/video.",
            en: "Audio/video coding standard.",
        },
        use_cases: Some(Text { id: "Video streaming.", en: "Video streaming." }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Cables",
        full_name: "Network Cables",
        description: Text {
            id: "Media transmisi fisik (Twisted Pair, Coaxial).",
            en: "Physical transmission media (Twisted Pair, Coaxial).",
        },
        use_cases: Some(Text { id: "Ethernet (RJ45).", en: "Ethernet (RJ45)." }),
        risks: &[SecurityNote {
            title: "Tapping",
            desc: Text {
                id: "Penyadapan fisik kabel.",
                en: "Physical cable tapping.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Physical Security",
            desc: Text {
                id: "Amankan akses ke ruang server/kabel.",
                en: "Secure access to server rooms/cables.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Fiber",
        full_name: "Fiber Optic",
        description: Text {
            id: "Kabel serat optik menggunakan cahaya.",
            en: "Optical fiber cable using light.",
        },
        use_cases: Some(Text {
            id: "Backbone internet, kecepatan tinggi.",
            en: "Internet backbone, high speed.",
        }),
        risks: &[SecurityNote {
            title: "Physical Damage",
            desc: Text {
                id: "Kabel putus memutus jaringan.",
                en: "Severed cable disconnects network.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Redundancy",
            desc: Text { id: "Jalur cadangan.", en: "Backup lines." },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Hubs",
        full_name: "Network Hub",
        description: Text {
            id: "Perangkat layer 1 yang meneruskan data ke SEMUA port (broadcast).",
            en: "Layer 1 device forwarding data to ALL ports (broadcast).",
        },
        use_cases: Some(Text {
            id: "Jaringan legacy (Jarang dipakai).",
            en: "Legacy networks (Rarely used).",
        }),
        risks: &[SecurityNote {
            title: "Sniffing",
            desc: Text {
                id: "Mudah disadap karena semua data dikirim ke semua port.",
                en: "Easy sniffing as data is sent to all ports.",
            },
        }],
        mitigations: &[SecurityNote {
            title: "Gunakan Switch",
            desc: Text {
                id: "Switch lebih cerdas dan aman.",
                en: "Switches are smarter and safer.",
            },
        }],
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Repeaters",
        full_name: "Repeater",
        description: Text {
            id: "Memperkuat sinyal agar bisa menempuh jarak lebih jauh.",
            en: "Amplifies signal to travel longer distances.",
        },
        use_cases: Some(Text {
            id: "Memperpanjang jangkauan Wi-Fi/Kabel.",
            en: "Extending Wi-Fi/Cable range.",
        }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
    ProtocolInfo {
        tag: "Switching",
        full_name: "Switching",
        description: Text {
            id: "Proses meneruskan paket berdasarkan MAC address (Layer 2) atau IP (Layer 3).",
            en: "Forwarding packets based on MAC address (Layer 2) or IP (Layer 3).",
        },
        use_cases: Some(Text { id: "LAN modern.", en: "Modern LANs." }),
        risks: NO_NOTES,
        mitigations: NO_NOTES,
        references: NO_REFS,
    },
];
