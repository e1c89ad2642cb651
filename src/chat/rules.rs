//! Assistant Response Rules
//!
//! The scripted knowledge base behind the STORIUM assistant: an ordered
//! table of (trigger substrings, canned response) pairs evaluated against
//! lower-cased user input. Order is significant; the first rule with any
//! matching trigger wins, so broader triggers sit below more specific ones.

pub struct Rule {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// First bot turn after the panel opens on an empty transcript.
pub const GREETING: &str = "👋 Hello! I'm STORIUM AI, your decentralized storage assistant. I can help you understand how STORIUM protects your data with blockchain and IPFS. Ask about our features, security, or how we differ from Google Drive or Filecoin!";

/// Offered right after the greeting, submitted verbatim as user turns.
pub const QUICK_QUESTIONS: [&str; 7] = [
    "What is STORIUM?",
    "Why choose decentralized over Google Drive?",
    "How do I upload files?",
    "How does access control work?",
    "What makes STORIUM unique?",
    "What is the roadmap?",
    "How do I set up MetaMask?",
];

/// Returned whenever no trigger matches.
pub const DEFAULT_RESPONSE: &str = "🔗 Blockchain is a decentralized, distributed digital ledger technology that records transactions across a network of computers in a secure, transparent, and immutable way. At its core, it functions like a shared database where data is stored in chronological 'blocks' linked together in a 'chain' using cryptographic hashes, ensuring that once information is added, it cannot be altered retroactively without consensus from the network. This eliminates intermediaries like banks, making it resistant to tampering and fraud.\n\n**How it works**: \n1) A user initiates a transaction, broadcast to the network.\n2) Nodes verify it using consensus like Proof-of-Work or Proof-of-Stake.\n3) Valid transactions form a block with a timestamp and hash of the previous block.\n4) The block is added to the chain and synced across nodes.\n5) Cryptography ensures immutability.\n\n**Types**: Public (e.g., Bitcoin), private, consortium, or hybrid.\n**Benefits**: Security, transparency, efficiency.\n**Challenges**: Scalability, energy use, regulation.\n**Applications**: Cryptocurrencies, supply chain, healthcare, voting.\nBy 2032, the blockchain market may reach $1 trillion. In STORIUM, Ethereum's blockchain manages file metadata and access control securely.\n\nAsk more about STORIUM's features, security, or how we compare to centralized clouds!";

/// Lower-case the input and return the first matching rule's response, or
/// the default when nothing matches. Total: every input yields a response.
pub fn respond(user_text: &str) -> &'static str {
    let message = user_text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| message.contains(t)))
        .map(|rule| rule.response)
        .unwrap_or(DEFAULT_RESPONSE)
}

pub static RULES: &[Rule] = &[
    // Introduction and problem statement
    Rule {
        triggers: &["what is storium", "about storium", "overview", "introduction"],
        response: "🌟 STORIUM is a decentralized cloud storage platform built on Ethereum blockchain and IPFS. Unlike centralized services like Google Drive or Dropbox, which can be hacked, censor content, or lock you out, STORIUM gives you true ownership, permanent storage, and censorship resistance. With over 1 billion records breached in 2024 and a 30% spike in censorship, STORIUM empowers you with Web3 security and a sleek, intuitive app.",
    },
    Rule {
        triggers: &["decentralized storage", "centralized", "big tech", "google drive", "dropbox", "why decentralized"],
        response: "⚠️ Centralized clouds like Google Drive or Dropbox risk data breaches (1B+ records in 2024) and censorship (30% spike). They control your data, can raise prices, or lock you out. STORIUM uses Ethereum and IPFS for true ownership, immutability, and protection—no middlemen, just your data, your control.",
    },
    Rule {
        triggers: &["data breaches", "scale of breaches"],
        response: "📊 In 2024, data breaches exposed over 1 billion records worldwide, highlighting the vulnerability of centralized storage. STORIUM's decentralized approach using Ethereum and IPFS ensures your data is secure, immutable, and free from single-point failures.",
    },
    Rule {
        triggers: &["censorship resistance", "censorship incidents"],
        response: "🚫 Censorship incidents on major platforms spiked by 30% in 2024. STORIUM's IPFS-based storage ensures no authority can block or delete your files, while Ethereum smart contracts provide transparent, user-controlled access.",
    },
    Rule {
        triggers: &["data ownership", "web3 empowerment"],
        response: "🔑 STORIUM empowers you with true data ownership via Ethereum wallet-based access and IPFS's distributed storage. Unlike centralized clouds, you control your files without relying on third parties, aligning with Web3's trustless principles.",
    },
    // Blockchain and technical concepts
    Rule {
        triggers: &["what is blockchain", "blockchain"],
        response: "🔗 Blockchain is a decentralized, distributed digital ledger technology that records transactions across a network of computers in a secure, transparent, and immutable way. At its core, it functions like a shared database where data is stored in chronological 'blocks' linked together in a 'chain' using cryptographic hashes, ensuring that once information is added, it cannot be altered retroactively without consensus from the network. This structure eliminates the need for intermediaries like banks or central authorities, making it resistant to tampering, fraud, and single points of failure.\n\n**How it works**: \n1) A user initiates a transaction, which is broadcast to the network.\n2) Nodes verify it using consensus mechanisms like Proof-of-Work or Proof-of-Stake.\n3) Valid transactions are grouped into a block with a timestamp and a cryptographic hash of the previous block.\n4) The block is added to the chain and distributed to all nodes.\n5) Cryptography ensures immutability.\n\n**Types**: Public (e.g., Bitcoin), private, consortium, or hybrid.\n**Benefits**: Security, transparency, efficiency.\n**Challenges**: Scalability, energy use, regulation.\n**Applications**: Cryptocurrencies, supply chain, healthcare, voting.\nBy 2032, the blockchain market may reach $1 trillion. In STORIUM, Ethereum's blockchain manages file metadata and access control securely.",
    },
    Rule {
        triggers: &["ethereum", "how ethereum works"],
        response: "🌐 Ethereum is a decentralized blockchain platform that runs smart contracts. In STORIUM, it powers the GlobalStorage contract on Sepolia testnet, handling file metadata, ownership, and permissions with low-cost, secure transactions.",
    },
    Rule {
        triggers: &["smart contract", "what is solidity"],
        response: "📜 A smart contract is a self-executing program on a blockchain. STORIUM's GlobalStorage.sol, written in Solidity, manages file metadata and access control. Solidity is a programming language for Ethereum smart contracts, ensuring secure and transparent operations.",
    },
    Rule {
        triggers: &["decentralized network"],
        response: "🌍 A decentralized network distributes data across many nodes, not a single server. STORIUM uses IPFS for file storage and Ethereum for metadata, ensuring no central authority can control or censor your data.",
    },
    Rule {
        triggers: &["ipfs", "interplanetary file system"],
        response: "📁 IPFS (InterPlanetary File System) is a peer-to-peer protocol for storing and sharing files across a distributed network. STORIUM uses IPFS to store files permanently, with each file assigned a unique CID for global access.",
    },
    Rule {
        triggers: &["cid", "content identifier"],
        response: "🔍 A Content Identifier (CID) is a unique hash for files on IPFS, generated from their content. In STORIUM, CIDs ensure files are uniquely addressable and retrievable from any IPFS node, guaranteeing permanence.",
    },
    Rule {
        triggers: &["cryptographic hash"],
        response: "🔒 A cryptographic hash is a fixed-length string generated from data, unique to its content. In STORIUM, IPFS uses hashes (CIDs) to identify files, ensuring integrity and enabling distributed retrieval.",
    },
    Rule {
        triggers: &["sepolia", "testnet"],
        response: "🌐 Sepolia is an Ethereum testnet (Chain ID: 11155111) for development, using free test ETH. STORIUM runs on Sepolia to test smart contracts and interactions, ensuring low-cost experimentation before mainnet or Layer 2 deployment.",
    },
    Rule {
        triggers: &["testnet faucet"],
        response: "💧 A testnet faucet provides free test ETH for networks like Sepolia. For STORIUM, use faucets like sepoliafaucet.com to get test ETH for transactions on the Sepolia testnet.",
    },
    Rule {
        triggers: &["gas fees", "transaction cost"],
        response: "⛽ Gas fees are payments for Ethereum transactions. In STORIUM on Sepolia, actions like uploading or granting access cost ~0.001-0.005 ETH (free test ETH). Future Layer 2 integration (Polygon, Arbitrum) will reduce fees to sub-cents.",
    },
    Rule {
        triggers: &["layer 2", "polygon", "arbitrum"],
        response: "🚀 Layer 2 solutions like Polygon or Arbitrum scale Ethereum by processing transactions off-chain with lower fees, settling on mainnet. STORIUM plans to integrate them to make actions like uploads cost fractions of a cent.",
    },
    Rule {
        triggers: &["wallet address", "metamask"],
        response: "🦊 A wallet address is a unique identifier for your Ethereum account. STORIUM uses MetaMask, a browser extension wallet, to connect to Sepolia, sign transactions, and prove ownership securely.",
    },
    Rule {
        triggers: &["private key", "seed phrase"],
        response: "🔐 A private key is a secret code for your Ethereum wallet, and the seed phrase is a 12-24 word backup. In STORIUM, keep them secure—losing them means losing access to your files, as it's fully decentralized.",
    },
    Rule {
        triggers: &["decentralized application", "dapp"],
        response: "🌐 A DApp is a decentralized app running on a blockchain. STORIUM is a DApp using Ethereum for access control and IPFS for storage, offering a user-friendly interface with Web3 security.",
    },
    Rule {
        triggers: &["ethers.js"],
        response: "📚 Ethers.js is a JavaScript library for interacting with Ethereum. In STORIUM, it connects the React frontend to the GlobalStorage contract, enabling actions like uploading files or managing permissions.",
    },
    Rule {
        triggers: &["smart contract mapping", "struct"],
        response: "🗂️ In STORIUM's Solidity contract, mappings (like ownership[owner][user]) track permissions, and structs (like FileInfo) store metadata like name, CID, and size. They ensure efficient, secure data management on-chain.",
    },
    Rule {
        triggers: &["event in smart contract"],
        response: "📢 Smart contract events log actions on the blockchain. STORIUM's contract emits events like FileUploaded or AccessGranted for transparency, allowing tracking of uploads and permission changes.",
    },
    Rule {
        triggers: &["reentrancy", "contract exploits"],
        response: "🛡️ Reentrancy is an attack where a contract is called repeatedly before finishing. STORIUM's contract avoids this with input validation and no complex loops, tested via Remix to ensure security.",
    },
    Rule {
        triggers: &["gpl-3.0", "license"],
        response: "📜 STORIUM is open-source under the GPL-3.0 license, allowing anyone to view, use, or modify the code while ensuring derivative works remain open-source.",
    },
    Rule {
        triggers: &["web3"],
        response: "🌐 Web3 is the decentralized internet powered by blockchain. STORIUM bridges Web2 usability (sleek UI, easy navigation) with Web3 security (Ethereum ownership, IPFS storage) for user-friendly decentralized storage.",
    },
    // IPFS and storage mechanics
    Rule {
        triggers: &["ipfs store", "distributed storage"],
        response: "📁 IPFS stores files across a network of nodes, not a single server. STORIUM uploads files to IPFS via Pinata, ensuring permanence and global access with no central point of failure.",
    },
    Rule {
        triggers: &["censorship-resistant", "ipfs censorship"],
        response: "🚫 IPFS's distributed nature makes STORIUM censorship-resistant. Files are stored across many nodes, so no single entity can block or delete them, ensuring free access.",
    },
    Rule {
        triggers: &["file pinning", "pinata"],
        response: "📌 Pinning ensures IPFS files stay available. STORIUM uses Pinata as a pinning gateway for reliability, but files remain accessible via other gateways like ipfs.io if Pinata is unavailable.",
    },
    Rule {
        triggers: &["ipfs gateway", "other gateways"],
        response: "🌐 An IPFS gateway (e.g., Pinata, ipfs.io) retrieves files by their CID. If Pinata goes down, STORIUM users can access files via other gateways, ensuring redundancy.",
    },
    Rule {
        triggers: &["file permanence", "files live forever"],
        response: "🔄 IPFS ensures permanence by replicating files across nodes. STORIUM pins files via Pinata, and as long as one node holds the file, it's accessible via its CID.",
    },
    Rule {
        triggers: &["ipfs nodes offline", "nodes go offline"],
        response: "🌍 If some IPFS nodes go offline, files remain accessible as long as one node holds the data. STORIUM's use of Pinata ensures pinning, and future multi-provider clustering will enhance redundancy.",
    },
    Rule {
        triggers: &["file replication", "replicated in ipfs"],
        response: "🔄 IPFS replicates files across nodes based on demand and pinning. STORIUM uses Pinata to pin files, ensuring they're available globally, with plans for multi-provider support.",
    },
    Rule {
        triggers: &["ipfs cost", "storage cost", "free storage"],
        response: "💾 IPFS storage is free, but Pinata pinning ensures persistence (free tier for small usage). STORIUM users pay gas (~0.001 ETH) for metadata, not storage—no recurring fees like AWS.",
    },
    Rule {
        triggers: &["large files", "file size"],
        response: "📦 STORIUM supports large files, recommending <100MB for fast uploads (~20s for 50MB). IPFS handles larger files, but gas costs for metadata are optimized for efficiency.",
    },
    Rule {
        triggers: &["file types", "classify file types"],
        response: "📋 STORIUM supports all file types (images, videos, documents, audio). The frontend uses extensions (e.g., .jpg for images) for previews and categorization, with no contract limits.",
    },
    // Smart contract and access control
    Rule {
        triggers: &["globalstorage", "smart contract work"],
        response: "📜 GlobalStorage.sol on Sepolia manages file metadata and access. It uses FileInfo structs (name, CID, size) and Access structs for permissions, with functions like addFile, allow, and getMyFiles.",
    },
    Rule {
        triggers: &["metadata", "file metadata"],
        response: "📊 STORIUM's contract stores metadata like file name, CID, type, size, and timestamp in FileInfo structs. This ensures efficient on-chain management while files live on IPFS.",
    },
    Rule {
        triggers: &["key functions", "contract functions"],
        response: "🔧 Key functions in GlobalStorage.sol: addFile (uploads metadata), allow/disallow (manage permissions), deleteFile (removes metadata), getMyFiles (lists owned files), getPublicFiles (lists public files).",
    },
    Rule {
        triggers: &["addfile", "upload function"],
        response: "⬆️ The addFile function in STORIUM's contract stores file metadata (name, CID, size) on-chain, emits a FileUploaded event, and links to IPFS. It's called during uploads, costing ~0.001 ETH.",
    },
    Rule {
        triggers: &["allow function", "disallow function"],
        response: "🤝 The allow function grants access to a wallet address, updating the ownership mapping. The disallow function revokes it. Both are instant, on-chain, and emit AccessGranted/Revoked events.",
    },
    Rule {
        triggers: &["getmyfiles", "getpublicfiles"],
        response: "📂 getMyFiles returns files owned or accessible by msg.sender. getPublicFiles lists all public files in the Public Explorer. Both use on-chain mappings for secure, transparent access.",
    },
    Rule {
        triggers: &["access control", "unauthorized access"],
        response: "🔒 STORIUM's contract uses ownership[owner][user] mappings to track permissions. Functions like getUserFiles verify msg.sender, preventing unauthorized access. Input validation ensures security.",
    },
    Rule {
        triggers: &["input validation", "validate inputs"],
        response: "🛡️ The contract validates inputs (e.g., no empty CIDs or zero sizes) to prevent errors or attacks. This ensures only valid metadata is stored, tested via Remix simulations.",
    },
    Rule {
        triggers: &["contract events", "emitted events"],
        response: "📢 STORIUM's contract emits events like FileUploaded, AccessGranted, and AccessRevoked for transparency. These log actions on-chain, enabling auditing and tracking.",
    },
    Rule {
        triggers: &["file deletion", "delete file"],
        response: "🗑️ Only owners can delete files via deleteFile, which removes metadata from the contract. IPFS files may persist if pinned elsewhere, aligning with immutability. Confirmation prompts prevent errors.",
    },
    // Features and functionality
    Rule {
        triggers: &["upload a file", "how to upload"],
        response: "⬆️ Upload: 1) Connect MetaMask to Sepolia, 2) Go to Upload tab, 3) Drag/drop or select file, 4) Add description/tags, 5) Set public/private, 6) Deploy to IPFS and Ethereum. Gas: ~0.001 ETH.",
    },
    Rule {
        triggers: &["public files", "private files", "visibility"],
        response: "🌐 Public files are listed in Public Explorer via getPublicFiles for sharing. Private files are restricted to owners or authorized wallets, verified on-chain. Set visibility during upload.",
    },
    Rule {
        triggers: &["grant access", "revoke access", "sharing"],
        response: "🤝 Share files: 1) Use Share tab to allow/disallow access to all files, 2) Select specific files in File Manager. Permissions update instantly on-chain, only for authorized wallets.",
    },
    Rule {
        triggers: &["public explorer"],
        response: "🌍 Public Explorer displays all public files via getPublicFiles. Users can browse, view, or download community-shared files, fostering collaboration while keeping private files secure.",
    },
    Rule {
        triggers: &["file search", "filters", "sort"],
        response: "🔍 Search files by name, filter by type (image, video, etc.), or sort by date/size/name in File Manager. Tags added during upload aid organization, with real-time previews for ease.",
    },
    Rule {
        triggers: &["download file", "access file", "retrieve"],
        response: "⬇️ Download/view: 1) In File Manager or Public Explorer, 2) Click for preview (e.g., images) or download, 3) Files are fetched via IPFS gateway (e.g., https://gateway.pinata.cloud/ipfs/<CID>).",
    },
    Rule {
        triggers: &["supported file types", "file formats"],
        response: "📋 STORIUM supports images (JPG, PNG, GIF with previews), documents (PDF, TXT), videos (MP4, AVI), audio (MP3, WAV), and more. Extensions categorize files for previews.",
    },
    Rule {
        triggers: &["real-time previews", "file previews"],
        response: "🖼️ Real-time previews show thumbnails for images or metadata for other files in File Manager. The React frontend uses extensions to render previews, enhancing user experience.",
    },
    // Security and benefits
    Rule {
        triggers: &["secure", "security", "phishing"],
        response: "🔒 STORIUM's security: 1) Wallet-based ownership, 2) IPFS distribution, 3) Immutable Ethereum records, 4) MetaMask signatures, 5) Contract validation. We educate on testnet faucets to avoid phishing.",
    },
    Rule {
        triggers: &["immutability", "tamper-proof"],
        response: "🔄 Immutability means files and metadata can't be altered once stored. STORIUM uses IPFS for permanent files and Ethereum for tamper-proof access logs, ensuring data integrity.",
    },
    Rule {
        triggers: &["lose wallet", "lose access", "wallet recovery"],
        response: "🔐 Losing your wallet means losing access, as STORIUM is fully decentralized with no central recovery. Backup your seed phrase. IPFS files are still accessible if you know the CID.",
    },
    Rule {
        triggers: &["filecoin", "arweave", "sia", "unique"],
        response: "🌟 STORIUM stands out with Ethereum-based access control, a polished React UI, and features like previews and search. Unlike Filecoin, Sia, or Arweave, we prioritize Web2 usability with Web3 security.",
    },
    Rule {
        triggers: &["benefits", "advantage", "pros"],
        response: "✨ STORIUM offers: 1) True ownership, 2) Permanent IPFS storage, 3) Censorship resistance, 4) Global access, 5) Transparent permissions, 6) No subscriptions—just gas fees.",
    },
    Rule {
        triggers: &["creators", "journalists", "businesses"],
        response: "🌍 STORIUM empowers creators (NFT storage), journalists (secure archives in censored areas), and businesses (private backups) with decentralized, censorship-resistant storage and Web2-like usability.",
    },
    // UI and design
    Rule {
        triggers: &["theme", "ui", "design", "glassmorphism"],
        response: "🎨 STORIUM's UI features a yellow-black theme with gold accents (#ffd700), glassmorphism (blurred panels), custom cursor animations, and responsive design for mobile/desktop.",
    },
    Rule {
        triggers: &["cursor animations", "custom cursor"],
        response: "🖱️ STORIUM's custom cursor features wave animations on hover, enhancing UX. Built with CSS and JavaScript, it adds a dynamic, modern feel to the React frontend.",
    },
    Rule {
        triggers: &["mobile-responsive", "responsive design"],
        response: "📱 STORIUM's UI is fully responsive, adapting to mobile and desktop with smooth animations and layouts, ensuring seamless file management on any device.",
    },
    // Future and business
    Rule {
        triggers: &["roadmap", "future", "enhancements"],
        response: "🚀 Roadmap: 1) Client-side encryption, 2) Folder organization, 3) Layer 2 (Polygon, Arbitrum) for low fees, 4) File versioning, 5) Multi-chain support (e.g., BSC) to scale STORIUM.",
    },
    Rule {
        triggers: &["client-side encryption", "encryption"],
        response: "🔐 Client-side encryption (planned) will encrypt files before IPFS upload, ensuring end-to-end privacy even if CIDs are exposed, enhancing STORIUM's security.",
    },
    Rule {
        triggers: &["file versioning"],
        response: "📝 File versioning (planned) will track file changes on STORIUM, ideal for collaborative projects or document management, stored efficiently on IPFS and Ethereum.",
    },
    Rule {
        triggers: &["multi-chain", "other chains"],
        response: "🌐 Multi-chain support (planned) will add chains like Binance Smart Chain to STORIUM, increasing accessibility and reducing costs while maintaining Ethereum's security.",
    },
    Rule {
        triggers: &["business model", "monetize", "funding"],
        response: "💼 STORIUM is open-source (GPL-3.0). Future monetization includes premium features (e.g., enhanced pinning) via tokens and DAO/NFT marketplace partnerships. Funding will scale development.",
    },
    Rule {
        triggers: &["nft marketplaces", "integrate with nft"],
        response: "🖼️ STORIUM can power NFT marketplaces by storing media files on IPFS with Ethereum-based access control, ensuring secure, permanent, and decentralized storage for digital assets.",
    },
    // Technical setup and troubleshooting
    Rule {
        triggers: &["set up metamask", "connect wallet"],
        response: "🦊 MetaMask setup: 1) Install from metamask.io, 2) Create/import wallet, 3) Switch to Sepolia (Chain ID: 11155111), 4) Get test ETH from sepoliafaucet.com, 5) Connect via STORIUM.",
    },
    Rule {
        triggers: &["test eth", "sepolia faucet"],
        response: "💧 Get test ETH for Sepolia from faucets like sepoliafaucet.com. Use it to pay gas fees (~0.001 ETH) for STORIUM actions like uploading or granting access.",
    },
    Rule {
        triggers: &["chain id", "sepolia chain id"],
        response: "🔗 Sepolia's Chain ID is 11155111. STORIUM uses it for testing on the Ethereum testnet, ensuring low-cost transactions with free test ETH.",
    },
    Rule {
        triggers: &["troubleshoot", "error", "not working"],
        response: "🔧 Troubleshoot: 1) Check MetaMask is on Sepolia with test ETH, 2) Verify Pinata keys, 3) Refresh wallet connection, 4) Use Chrome/Firefox, 5) Check console. Run 'npm run dev' locally.",
    },
    Rule {
        triggers: &["deploy contract", "remix"],
        response: "🚀 Deploy: 1) Open remix.ethereum.org, 2) Paste GlobalStorage.sol, 3) Compile with Solidity 0.8.x, 4) Connect MetaMask to Sepolia, 5) Deploy, 6) Update App.jsx with address.",
    },
    Rule {
        triggers: &["run locally", "npm run dev"],
        response: "💻 Run STORIUM locally: 1) Clone repo, 2) Run 'npm install', 3) Add Pinata keys to .env, 4) Run 'npm run dev', 5) Access at http://localhost:3000 with MetaMask on Sepolia.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_match_returns_rule_text() {
        let reply = respond("What is STORIUM?");
        assert!(reply.starts_with("🌟 STORIUM is a decentralized cloud storage platform"));
    }

    #[test]
    fn test_unmatched_input_returns_default() {
        assert_eq!(respond("asdf"), DEFAULT_RESPONSE);
        assert_eq!(respond(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(respond("TELL ME ABOUT IPFS"), respond("tell me about ipfs"));
    }

    #[test]
    fn test_earlier_rule_wins_on_collision() {
        // "what is blockchain" also contains "blockchain"; both live in the
        // same rule, but "decentralized storage" vs the bare "centralized"
        // trigger exercises ordering across rules: "decentralized storage"
        // sits in an earlier rule than "distributed storage".
        let reply = respond("compare decentralized storage with distributed storage");
        assert!(reply.starts_with("⚠️ Centralized clouds"));
    }

    #[test]
    fn test_specific_rule_shadows_broad_trigger() {
        // "sepolia" matches before the later "sepolia faucet" rule can.
        let reply = respond("where is the sepolia faucet");
        assert!(reply.starts_with("🌐 Sepolia is an Ethereum testnet"));
    }

    #[test]
    fn test_trigger_as_substring_of_larger_input() {
        let reply = respond("I keep hearing about gas fees, why?");
        assert!(reply.starts_with("⛽"));
    }

    #[test]
    fn test_every_rule_has_triggers_and_text() {
        for rule in RULES {
            assert!(!rule.triggers.is_empty());
            assert!(!rule.response.is_empty());
            for t in rule.triggers {
                assert_eq!(*t, t.to_lowercase(), "trigger must be lower-case: {t}");
            }
        }
    }

    #[test]
    fn test_quick_questions_resolve() {
        assert!(respond(QUICK_QUESTIONS[0]).starts_with("🌟"));
        assert!(respond(QUICK_QUESTIONS[1]).starts_with("⚠️"));
        assert!(respond(QUICK_QUESTIONS[3]).starts_with("🔒"));
        assert!(respond(QUICK_QUESTIONS[5]).starts_with("🚀 Roadmap"));
        // "How do I upload files?" matches no trigger and falls to the
        // default explainer, same as free-form unmatched input.
        assert_eq!(respond(QUICK_QUESTIONS[2]), DEFAULT_RESPONSE);
    }
}
