//! Fingerprint catalog of known cartridge dumps.
//!
//! Keys are MD5 digests of the raw ROM image (no container header).

use std::borrow::Cow;

use super::layout::CartType;
use super::CatalogEntry;

const fn entry(
    fingerprint: &'static str,
    cart_type: CartType,
    analog_joystick: bool,
    analog_sensitivity: f32,
    analog_range: f32,
    name: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        fingerprint: Cow::Borrowed(fingerprint),
        cart_type,
        analog_joystick,
        analog_sensitivity,
        analog_range,
        name,
    }
}

pub(crate) static BUILTIN_CATALOG: &[CatalogEntry] = &[
    entry("75925ce4174594735832c2de30e8ffde", CartType::Std32, true, 1.0, 1.0, "3-D Tic-Tac-Toe (Conversion)"),
    entry("90dee6cf40d5902f199c575bbc246bce", CartType::Std32, true, 1.0, 1.0, "Abracadabra! (Conversion)"),
    entry("1c672fe917f11f7499e655a3fe485636", CartType::Std32, true, 1.0, 1.0, "Analog Classics #1 (Conversion)"),
    entry("72a91c53bfaa558d863610e3e6d50213", CartType::NonSplit16, true, 1.0, 1.0, "Ant Eater"),
    entry("e295b1a01ce0f17a9ecb68a7ba384ff9", CartType::NonSplit16, true, 1.0, 1.0, "Ant Eater (Alternate)"),
    entry("c8e90376b7e1b00dcbd4042f50bffb75", CartType::NonSplit16, true, 1.0, 1.0, "Atari 5200 Calibration Cart"),
    entry("45f8841269313736489180c8ec3e9588", CartType::NonSplit16, true, 1.0, 1.0, "Activision Decathlon, The (USA)"),
    entry("4b1aecab0e2f9c90e514cb0a506e3a5f", CartType::Std32, true, 1.0, 1.0, "Adventure II-a"),
    entry("e2f6085028eb8cf24ad7b50ca4ef640f", CartType::Std32, true, 1.0, 1.0, "Adventure II-b"),
    entry("b48dd725b5d024ef0a5a797fb5acefc6", CartType::Std32, true, 1.0, 1.0, "Alien Swarm (XL Conversion)"),
    entry("9e6d04dc20cbd6d3cdb722e420dea203", CartType::Std32, true, 1.0, 1.0, "ANALOG Multicart (XL Conversion)"),
    entry("737717ff4f8402ed5b02e4bf866bbbe3", CartType::Std32, true, 1.0, 1.0, "ANALOG Multicart V2 (XL Conversion)"),
    entry("77c6b647746bb1413c5566378ef25eec", CartType::Std32, true, 1.0, 1.0, "Archon (XL Conversion)"),
    entry("496a4cdb681e938f6cca13ac679fff7f", CartType::Std32, true, 1.0, 1.0, "Archon (Alternate)"),
    entry("bae7c1e5eb04e19ef8d0d0b5ce134332", CartType::Split16, true, 1.0, 1.0, "Astro Chase (USA)"),
    entry("10cdf2bbb058bb4cc518fd25031f427d", CartType::Std32, true, 1.0, 1.0, "Astro Grover (XL Conversion)"),
    entry("d31a3bbb4c99f539f0d2c4e02bec516e", CartType::Std32, true, 1.0, 1.0, "Atlantis (XL Conversion)"),
    entry("ec65389cc604b279d69a889725c723e7", CartType::Std32, true, 1.0, 1.0, "Attack of the Mutant Camels (XL Conversion)"),
    entry("eadcaf6e7b09a2350a10ac2c5b6c776a", CartType::Std8, true, 1.0, 1.0, "Bacterion (Conversion)"),
    entry("f5cd178cbea0ae7d8cf65b30cfd04225", CartType::Std32, true, 0.7, 1.0, "Ballblazer (USA)"),
    entry("c9019124080eccb37c20ecf539d72796", CartType::NonSplit16, true, 1.0, 1.0, "Basketball (Conversion)"),
    entry("8576867c2cfc965cf152be0468f684a7", CartType::Split16, true, 1.0, 1.0, "Battlezone (1983) (Atari) (Prototype)"),
    entry("96b424d0bb0339f4edfe8095fe275d62", CartType::Std32, true, 1.0, 1.0, "Batty Builders (XL Conversion)"),
    entry("8123393ae9635f6bc15ddc3380b04328", CartType::NonSplit16, true, 1.0, 1.0, "Blueprint (1982) (CBS)"),
    entry("17e5c03b4fcada48d4c2529afcfe3a70", CartType::Std32, true, 1.0, 1.0, "BCs Quest For Tires (XL Conversion)"),
    entry("96ec5b299b203c88f98100b57af6838d", CartType::Std32, true, 1.0, 1.0, "Biscuits From Hell"),
    entry("315e0bb45f28bb227e92b8c9e00ee8eb", CartType::Std32, true, 1.0, 1.0, "Blaster"),
    entry("992f62ccfda4c92ef113af1dd96d8f55", CartType::NonSplit16, true, 1.0, 1.0, "BlowSub"),
    entry("1913310b1e44ad7f3b90aeb16790a850", CartType::NonSplit16, true, 1.0, 1.0, "Beamrider (USA)"),
    entry("f8973db8dc272c2e5eb7b8dbb5c0cc3b", CartType::NonSplit16, true, 1.0, 1.0, "BerZerk (USA)"),
    entry("139229eed18032fdea735fa5360bd551", CartType::Std32, true, 1.0, 1.0, "Beef Drop Ultimate SD Edition"),
    entry("81790daff7f7646a6c371c056622be9c", CartType::BountyBob40, true, 1.0, 1.0, "Bounty Bob Strikes Back (Merged) (Big Five Software) (U)"),
    entry("5d5a75ac53230915701bc918249f1055", CartType::BountyBob40Alt, true, 1.0, 1.0, "Bounty Bob Strikes Back! (1984)(Big Five Software)(US)"),
    entry("a074a1ff0a16d1e034ee314b85fa41e9", CartType::Split16, true, 1.0, 1.0, "Buck Rogers - Planet of Zoom (USA)"),
    entry("f345dd189879f8d13e4c8c5737279fa3", CartType::Split16, true, 1.0, 1.0, "Buck Rogers - Planet of Zoom (USA)[a]"),
    entry("713feccd8f2722f2e9bdcab98e25a35f", CartType::Std32, true, 1.0, 1.0, "Buried Bucks (XL Conversion)"),
    entry("3147ad22f8d5f46b1ef40a39da3a3de1", CartType::Std32, true, 1.0, 1.0, "Captain Beeble (XL Conversion)"),
    entry("79335deb06a1ef532fea8eee8012ecde", CartType::NonSplit16, true, 1.0, 1.0, "Capture the Flag"),
    entry("01b978c3faf5d516f300f98c00377532", CartType::Std8, true, 1.0, 1.0, "Carol Shaw's River Raid (USA)"),
    entry("4965b4c8acca64c4fac39a7c0763f611", CartType::Std32, true, 1.0, 1.0, "Castle Blast (USA) (Unl)"),
    entry("8f4c07a9e0ef2ded720b403810220aaf", CartType::Std32, true, 1.0, 1.0, "Castle Crisis (USA) (Unl)"),
    entry("d64a175672b6dba0c0b244c949799e64", CartType::Std32, true, 1.0, 1.0, "Caverns of Mars (Conv)"),
    entry("1db260d6769bed6bf4731744213097b8", CartType::NonSplit16, true, 1.0, 1.0, "Caverns Of Mars 2 (Conv)"),
    entry("c4a14a88a4257970223b1ef9bf95da5b", CartType::NonSplit16, true, 1.0, 1.0, "Caverns Of Mars 3 (Conv)"),
    entry("261702e8d9acbf45d44bb61fd8fa3e17", CartType::Split16, true, 0.17, 0.5, "Centipede (USA)"),
    entry("df283efab9d36a15603283ee2a7bdb71", CartType::Std32, true, 1.0, 1.0, "Chess (XL Conversion)"),
    entry("21b722b9c93076a3605ec157ac3aa4b8", CartType::Std32, true, 1.0, 1.0, "Chop Suey"),
    entry("3ff7707e25359c9bcb2326a5d8539852", CartType::NonSplit16, true, 1.0, 1.0, "Choplifter! (USA)"),
    entry("701dd2903b55a5b6734afa120e141334", CartType::Std32, true, 1.0, 1.0, "Chicken (XL Conversion)"),
    entry("e60a98edcc5cad98170772ea8d8c118d", CartType::Std32, true, 1.0, 1.0, "Claim Jumper (XL Conversion)"),
    entry("f21a0fb1653215bbeea87dd80249015e", CartType::NonSplit16, true, 1.0, 1.0, "Claim Jumper (XL Converion Alternate)"),
    entry("4a754460e43bebd08b943c8dba31d581", CartType::Std32, true, 1.0, 1.0, "Clowns & Balloons (XL Conversion)"),
    entry("dc382809b4ba707d8a9084421c7a4976", CartType::NonSplit16, true, 1.0, 1.0, "Cloudburst"),
    entry("5720423ebd7575941a1586466ba9beaf", CartType::Split16, true, 1.0, 1.0, "Congo Bongo (USA)"),
    entry("88ea120ef17747d7b567ffa08b9fb578", CartType::Split16, true, 1.0, 1.0, "Congo Bongo (1983) (Sega)"),
    entry("1a64edff521608f9f4fa9d7bdb355087", CartType::Split16, true, 1.0, 1.0, "Countermeasure (USA)"),
    entry("4c034f3db0489726abd401550a402c32", CartType::Std32, true, 1.0, 1.0, "COSMI (XL Conversion)"),
    entry("195c23a894c7ac8631757eec661ab1e6", CartType::Std32, true, 1.0, 1.0, "Crossfire (XL Conversion)"),
    entry("cd64cc0b348a634080078206e3111f9a", CartType::Std32, true, 1.0, 1.0, "Crystal Castles (Final Conversion)"),
    entry("550ef46dfa0945b6dd693b0fab6385a5", CartType::Std32, true, 1.0, 1.0, "Crystal Castles (Clay)"),
    entry("c24be906c9d79f4eab391fd583332a4c", CartType::Std32, true, 1.0, 1.0, "Curse of the Lost Miner"),
    entry("7c27d225a13e178610babf331a0759c0", CartType::NonSplit16, true, 1.0, 1.0, "David Crane's Pitfall II - Lost Caverns (USA)"),
    entry("27d5f32b0d46d3d80773a2b505f95046", CartType::Split16, true, 1.0, 1.0, "Defender (1982) (Atari)"),
    entry("8e280ad05824ef4ca32700716ef8e69a", CartType::NonSplit16, true, 1.0, 1.0, "Deluxe Invaders"),
    entry("b4af8b555278dec6e2c2329881dc0a15", CartType::Std32, true, 1.0, 1.0, "Demon Attack (XL Conversion)"),
    entry("32b2bb28213dbb01b69e003c4b35bb57", CartType::Std32, true, 1.0, 1.0, "Desmonds Dungeon (XL Conversion)"),
    entry("6049d5ef7eddb1bb3a643151ff506219", CartType::Std32, true, 1.0, 1.0, "Diamond Mine (XL Conversion)"),
    entry("3abd0c057474bad46e45f3d4e96eecee", CartType::Split16, true, 1.0, 1.0, "Dig Dug (1983) (Atari)"),
    entry("2108ee2967b6cd7ceda757a601c4b63c", CartType::Std32, true, 1.0, 1.0, "Dig Dug 10-9 (Conversion)"),
    entry("1d1eab4067fc0aaf2b2b880fb8f72e40", CartType::Std32, true, 1.0, 1.0, "Donkey Kong Arcade"),
    entry("4dcca2e6a88d57e54bc7b2377cc2e5b5", CartType::Std32, true, 1.0, 1.0, "Donkey Kong Jr Enhanced"),
    entry("0c393d2b04afae8a8f8827d30794b29a", CartType::Std32, true, 1.0, 1.0, "Donkey Kong (XL Conversion)"),
    entry("ae5b9bbe91983ab111fd7cf3d29d6b11", CartType::Std32, true, 1.0, 1.0, "Donkey Kong Jr (XL Conversion)"),
    entry("159ccaa564fc2472afd1f06665ec6d19", CartType::Std8, true, 1.0, 1.0, "Dreadnaught Factor, The (USA)"),
    entry("b7fafc8ae6bb0801e53d5756b14dbe31", CartType::NonSplit16, true, 1.0, 1.0, "Drelbs (Conversion)"),
    entry("ec325297c45973292a9e99e807d3efdf", CartType::Std32, true, 1.0, 1.0, "Ducks Ahoy (Conversion)"),
    entry("2d9e5f9589e6162905cfd164ee41a13a", CartType::NonSplit16, true, 1.0, 1.0, "Embargo (Conversion)"),
    entry("e9b7d19c573a30e6503f35c886666358", CartType::Std32, true, 1.0, 1.0, "Encounter"),
    entry("7259353c39aadf76f2eb284e7666bb58", CartType::Std32, true, 1.0, 1.0, "ET (32k)"),
    entry("5789a45479d9769d4662a15f349d83ed", CartType::Std32, true, 0.12, 0.3, "Fairy Force (homebrew)"),
    entry("4b6c878758f4d4de7f9650296db76d2e", CartType::Std32, true, 1.0, 1.0, "Fast Eddie (XL Conversion)"),
    entry("cc9a9240975aceb5953996b1ed1b88c6", CartType::Std32, true, 1.0, 1.0, "Fast Eddie (Alternate)"),
    entry("5cf2837752ef8dfa3a6962a28fc0077b", CartType::Std8, true, 1.0, 1.0, "Falcon (XL Conversion)"),
    entry("6b58f0f3175a2d6796c35afafe6b245d", CartType::Std8, true, 1.0, 1.0, "Floyd The Droid (XL Conversion)"),
    entry("14bd9a0423eafc3090333af916cfbce6", CartType::Split16, true, 1.0, 1.0, "Frisky Tom (USA) (Proto)"),
    entry("c717ebc92233d206f262d15258e3184d", CartType::Split16, true, 1.0, 1.0, "Frisky Tom (USA) (Hack)"),
    entry("598b469a04c956a5c1e15827773a4a8b", CartType::Std32, true, 1.0, 1.0, "Forbidden Forest - Slinky (Conversion)"),
    entry("05a086fe4cc3ad16d39c3bc45eb9c26f", CartType::Std32, true, 1.0, 1.0, "Fort Apocalypse (XL Conversion)"),
    entry("a8ee72c80491ce33e24b7f56c2865a27", CartType::Std32, true, 1.0, 1.0, "Freecell XE (Conversion)"),
    entry("2c89c9444f99fd7ac83f88278e6772c6", CartType::Std8, true, 1.0, 1.0, "Frogger (1983) (Parker Bros)"),
    entry("d8636222c993ca71ca0904c8d89c4411", CartType::Split16, true, 1.0, 1.0, "Frogger II - Threeedeep! (USA)"),
    entry("8e03034fc42ceaa5f7688af08c1f077c", CartType::Split16, true, 1.0, 1.0, "Frogger II - Threeedeep! (US)[a]"),
    entry("d1a3b6613b03716af6aefe21d1bfdf07", CartType::Split16, true, 1.0, 1.0, "Frogger II - Threeedeep! (US)[o2][a]"),
    entry("98113c00a7c82c83ee893d8e9352aa7a", CartType::Std8, true, 1.0, 1.0, "Galactic_Chase"),
    entry("3ace7c591a88af22bac0c559bbb08f03", CartType::Std8, true, 1.0, 1.0, "Galaxian (1982) (Atari)"),
    entry("4012282da62c0d72300294447ef6b9a2", CartType::Std32, true, 1.0, 1.0, "Gateway to Apshai (XL Conversion)"),
    entry("0fdce0dd4014f3188d0ca289f53387d0", CartType::Std32, true, 1.0, 1.0, "Gebelli Compilation (XL Conversion)"),
    entry("85fe2492e2945015000272a9fefc06e3", CartType::Std8, true, 1.0, 1.0, "Gorf (1982) (CBS)"),
    entry("a21c545a52d488bfdaf078d786bf4916", CartType::Std32, true, 1.0, 1.0, "Gorf Converted (1982) (CBS)"),
    entry("dc271e475b4766e80151f1da5b764e52", CartType::Std32, true, 1.0, 1.0, "Gremlins (USA)"),
    entry("af6a7429a39039d04acf69f0cd6321a2", CartType::Std8, true, 1.0, 1.0, "Gunpower Charlie"),
    entry("dacc0a82e8ee0c086971f9d9bac14127", CartType::Split16, true, 1.0, 1.0, "Gyruss (USA)"),
    entry("9983ab618fac2469f82bac1fc19f895b", CartType::Split16, true, 1.0, 1.0, "Gyruss (USA) (Alt)"),
    entry("b7617ac90462ef13f8350e32b8198873", CartType::Split16, true, 1.0, 1.0, "Gyruss (Autofire Hack)"),
    entry("f8f0e0a6dc2ffee41b2a2dd736cba4cd", CartType::NonSplit16, true, 1.0, 1.0, "H.E.R.O. (USA)"),
    entry("3491fa368ae42766a83a43a627496c41", CartType::Split16, true, 1.0, 1.0, "Hangly Pollux"),
    entry("0f6407d83115a78a182f323e5ef76384", CartType::NonSplit16, true, 1.0, 1.0, "Heavy Metal"),
    entry("0c25803c9175487afce0c9d636133dc1", CartType::Std32, true, 1.0, 1.0, "Hyperblast! (XL Conversion)"),
    entry("d824f6ee24f8bc412468268395a76159", CartType::Std32, true, 1.0, 1.0, "Ixion (XL Conversion)"),
    entry("936db7c08e6b4b902c585a529cb15fc5", CartType::Split16, true, 1.0, 1.0, "James Bond 007 (USA)"),
    entry("082846d3a43aab4672fe98252eb1b6f9", CartType::Std32, true, 1.0, 1.0, "Jawbreaker (XL Conversion)"),
    entry("32ad87f1f480a29caa2cef9f51129a5d", CartType::Std32, true, 1.0, 1.0, "Jetboot Jack (Conversion)"),
    entry("7a32eb8e820f5aaab755637745d36f01", CartType::Std32, true, 1.0, 1.0, "Journey To The Planets (Conversion)"),
    entry("25cfdef5bf9b126166d5394ae74a32e7", CartType::Split16, true, 1.0, 1.0, "Joust (USA)"),
    entry("bc748804f35728e98847da6cdaf241a7", CartType::Split16, true, 1.0, 1.0, "Jr. Pac-Man (USA) (Proto)"),
    entry("40f3fca978058da46cd3e63ea8d2412f", CartType::Split16, true, 1.0, 1.0, "Jr Pac-Man (1984) (Atari) (U)"),
    entry("a0d407ab5f0c63e1e17604682894d1a9", CartType::Std32, true, 1.0, 1.0, "Jumpman Jr (Conv)"),
    entry("27140302a715694401319568a83971a1", CartType::Std32, true, 1.0, 1.0, "Jumpman Jr (XL Conversion)"),
    entry("1a6ccf1152d2bcebd16f0989b8257108", CartType::Std32, true, 1.0, 1.0, "Jumpman Jr (XL Conversion)"),
    entry("834067fdce5d09b86741e41e7e491d6c", CartType::Split16, true, 1.0, 1.0, "Jungle Hunt (USA)"),
    entry("9584d143be1871241e4a0d038e8e1468", CartType::Std32, true, 1.0, 1.0, "Juno First (XL Conversion)"),
    entry("92fd2f43bc0adf2f704666b5244fadf1", CartType::Std4, true, 1.0, 1.0, "Kaboom! (USA)"),
    entry("796d2c22f8205fb0ce8f1ee67c8eb2ca", CartType::Split16, true, 1.0, 1.0, "Kangaroo (USA)"),
    entry("22097e3b37e4f1b68e86ad3787575cab", CartType::Split16, true, 1.0, 1.0, "Kangaroo (US)[b2]"),
    entry("f25a084754ea4d37c2fb1dc8ca6dc51b", CartType::Std8, true, 1.0, 1.0, "Keystone Kapers (USA)"),
    entry("3b03e3cda8e8aa3beed4c9617010b010", CartType::Std32, true, 1.0, 1.0, "Koffi - Yellow Kopter (USA) (Unl)"),
    entry("03d0d59c5382b0a34a158e74e9bfce58", CartType::Std8, true, 1.0, 1.0, "Kid Grid"),
    entry("b99f405de8e7700619bcd18524ba0e0e", CartType::Std8, true, 1.0, 1.0, "K-Razy Shoot-Out (USA)"),
    entry("66977296ff8c095b8cb755de3472b821", CartType::Std8, true, 1.0, 1.0, "K-Razy Shoot-Out (1982) (CBS) [h1] (Two Port)"),
    entry("5154dc468c00e5a343f5a8843a14f8ce", CartType::Std32, true, 1.0, 1.0, "K-Star Patrol (XL Conversion)"),
    entry("c4931be078e2b16dc45e9537ebce836b", CartType::Std32, true, 1.0, 1.0, "Laser Gates (Conversion)"),
    entry("46264c86edf30666e28553bd08369b83", CartType::NonSplit16, true, 1.0, 1.0, "Last Starfighter, The (USA) (Proto)"),
    entry("d0a1654625dbdf3c6b8480c1ed17137f", CartType::Split16, true, 1.0, 1.0, "Looney Tunes Hotel (1983) (Atari) (Prototype)"),
    entry("ff785ce12ad6f4ca67f662598025c367", CartType::Std8, true, 1.0, 1.0, "Megamania (1983) (Activision)"),
    entry("8311263811e366bf5ef07977d0f5a5ae", CartType::Std32, true, 1.0, 1.0, "MajorBlink_5200_V2 (XL Conversion)"),
    entry("d00dff571bfa57c7ff7880c3ce03b178", CartType::Std32, true, 1.0, 1.0, "Mario Brothers (1983) (Atari)"),
    entry("1cd67468d123219201702eadaffd0275", CartType::NonSplit16, true, 1.0, 1.0, "Meteorites (USA)"),
    entry("bc33c07415b42646cc813845b979d85a", CartType::Std32, true, 1.0, 1.0, "Meebzork (1983) (Atari)"),
    entry("24348dd9287f54574ccc40ee40d24a86", CartType::Split16, true, 1.0, 1.0, "Microgammon SB (1983) (Atari) (Prototype)"),
    entry("84d88bcdeffee1ab880a5575c6aca45e", CartType::NonSplit16, false, 1.0, 1.0, "Millipede (USA) (Proto)"),
    entry("d859bff796625e980db1840f15dec4b5", CartType::NonSplit16, true, 1.0, 1.0, "Miner 2049er Starring Bounty Bob (USA)"),
    entry("69d472a79f404e49ad2278df3c8a266e", CartType::Split16, false, 1.0, 1.0, "Miniature Golf (1983) (Atari)"),
    entry("972b6c0dbf5501cacfdc6665e86a796c", CartType::Std8, true, 0.1, 0.15, "Missile Command (USA)"),
    entry("3090673bd3f8c04a92e391bf5540b88b", CartType::Std32, true, 1.0, 1.0, "MC+final"),
    entry("694897cc0d98fcf2f59eef788881f67d", CartType::Split16, true, 1.0, 1.0, "Montezuma's Revenge featuring Panama Joe (USA)"),
    entry("296e5a3a9efd4f89531e9cf0259c903d", CartType::NonSplit16, true, 1.0, 1.0, "Moon Patrol (USA)"),
    entry("2d8e6aa095bf2aee75406ade8b035a50", CartType::NonSplit16, true, 1.0, 1.0, "Moon Patrol Sprite Hack (USA)"),
    entry("627dbb2f84daef11229a165a69d84e09", CartType::Std32, true, 1.0, 1.0, "Moon Patrol Redux"),
    entry("618e3eb7ae2810768e1aefed1bfdcec4", CartType::Std8, true, 1.0, 1.0, "Mountain King (USA)"),
    entry("23296829e0e1316541aa6b5540b9ba2e", CartType::Std8, true, 1.0, 1.0, "Mountain King (1984) (Sunrise Software) [h1] (Two Port)"),
    entry("fc3ab610323cc34e7984f4bd599b871f", CartType::Std32, true, 1.0, 1.0, "Mr Cool (XL Conversion)"),
    entry("d1873645fee21e84b25dc5e939d93e9b", CartType::Std8, true, 1.0, 1.0, "Mr. Do!'s Castle (USA)"),
    entry("ef9a920ffdf592546499738ee911fc1e", CartType::Split16, true, 1.0, 1.0, "Ms. Pac-Man (USA)"),
    entry("8341c9a660280292664bcaccd1bc5279", CartType::Std32, true, 1.0, 1.0, "Necromancer"),
    entry("2624f5747d3a80a734d5c015cd76b3f9", CartType::Std32, true, 1.0, 1.0, "Necromancer (Alternate)"),
    entry("6c661ed6f14d635482f1d35c5249c788", CartType::Std32, true, 1.0, 1.0, "Oils Well (XL Conversion)"),
    entry("5781071d4e3760dd7cd46e1061a32046", CartType::Std32, true, 1.0, 1.0, "O'Riley's Mine (XL Conversion)"),
    entry("ba9c81ec09505f76ecabde9716f0e7c3", CartType::Std32, true, 1.0, 1.0, "Pacman Arcade Demo V2"),
    entry("f1a4d62d9ba965335fa13354a6264623", CartType::Split16, true, 1.0, 1.0, "Pac-Man (USA)"),
    entry("e24490c20bf79c933e50c11a89018960", CartType::Std32, true, 1.0, 1.0, "Pac-Man (Fixed Munch V2)"),
    entry("3e90be559f2baee9aceee5853141f284", CartType::Std32, true, 1.0, 1.0, "Pac-Man Plus"),
    entry("43e9af8d8c648515de46b9f4bcd024d7", CartType::Std32, true, 1.0, 1.0, "Pacific Coast Hwy (XL Conversion)"),
    entry("57c5b010ec9b5f6313e691bdda94e185", CartType::Std32, false, 1.0, 1.0, "Pastfinder (XL Conversion)"),
    entry("a301a449fc20ad345b04932d3ca3ef54", CartType::Std32, true, 0.5, 0.5, "Pengo (USA)"),
    entry("c4a14a88a4257970223b1ef9bf95da5b", CartType::NonSplit16, false, 1.0, 1.0, "Phobos (not working)"),
    entry("b9e727eaef3463d5979ec06fc5bd5048", CartType::NonSplit16, true, 1.0, 1.0, "Pinhead"),
    entry("ecbd6dd2ab105dd43f98476966bbf26c", CartType::Std8, true, 1.0, 1.0, "Pitfall! (USA) (use classics fix instead)"),
    entry("2be3529c33fdf6b76fa7528ba43cdd7f", CartType::Std32, true, 1.0, 1.0, "Pitfall (classics fix)"),
    entry("e600c16c2b1f063ffb3f96caf4d23235", CartType::Std32, true, 1.0, 1.0, "Pitstop (XL Conversion)"),
    entry("9e296c2817cbe1671005cf4dfebe8721", CartType::Std32, true, 1.0, 1.0, "Protector II (XL Conversion)"),
    entry("fd0cbea6ad18194be0538844e3d7fdc9", CartType::Split16, true, 0.25, 0.4, "Pole Position (USA)"),
    entry("c3fc21b6fa55c0473b8347d0e2d2bee0", CartType::Std32, true, 1.0, 1.0, "Pooyan"),
    entry("dd4ae6add63452aafe7d4fa752cd78ca", CartType::Split16, true, 1.0, 1.0, "Popeye (USA)"),
    entry("66057fd4b37be2a45bd8c8e6aa12498d", CartType::Std32, true, 1.0, 1.0, "Popeye Arcade Final (Hack)"),
    entry("894959d9c5a88c8e1744f7fcbb930065", CartType::Std32, true, 1.0, 1.0, "Preppie! (XL Conversion)"),
    entry("03ce205f9f1796183005301be5ae87fc", CartType::NonSplit16, true, 1.0, 1.0, "Preppie! II (Conversion)"),
    entry("9e296c2817cbe1671005cf4dfebe8721", CartType::Std32, true, 1.0, 1.0, "Protector II (Conversion)"),
    entry("ccd35e9ea3b3c5824214d88a6d8d8f7e", CartType::Std8, true, 1.0, 1.0, "Pete's Diagnostics (1982) (Atari)"),
    entry("7830f985faa701bdec47a023b5953cfe", CartType::Std32, false, 1.0, 1.0, "Emi Pool (XL Conversion)"),
    entry("ce44d14341fcc5e7e4fb7a04f77ffec9", CartType::Std8, true, 1.0, 1.0, "Q-bert (USA)"),
    entry("9b7d9d874a93332582f34d1420e0f574", CartType::Split16, true, 1.0, 1.0, "QIX (USA)"),
    entry("099706cedd068aced7313ffa371d7ec3", CartType::NonSplit16, false, 1.0, 1.0, "Quest for Quintana Roo (USA)"),
    entry("80e0ad043da9a7564fec75c1346dbc6e", CartType::NonSplit16, true, 1.0, 1.0, "Rainbow Walker (Conversion)"),
    entry("150ff18392c270001f10e7934b2af546", CartType::Std32, true, 1.0, 1.0, "Rally Speedway (XL Conversion)"),
    entry("a157be3500786000e138711c4826b16c", CartType::Std32, true, 1.0, 1.0, "Raster Music Tracker"),
    entry("88fa71fc34e81e616bdffc30e013330b", CartType::Std32, true, 1.0, 1.0, "Ratcatcher"),
    entry("623af6c0723c9c6f2707f247defbfa2f", CartType::Std32, true, 1.0, 1.0, "Ratcatcher (Alternate)"),
    entry("2bb928d7516e451c6b0159ac413407de", CartType::Std32, true, 1.0, 1.0, "RealSports Baseball (USA)"),
    entry("e056001d304db597bdd21b2968fcc3e6", CartType::Std32, true, 1.0, 1.0, "RealSports Basketball (USA)"),
    entry("022c47b525b058796841134bb5c75a18", CartType::Split16, true, 1.0, 1.0, "RealSports Football (USA)"),
    entry("3074fad290298d56c67f82e8588c5a8b", CartType::Split16, true, 1.0, 1.0, "RealSports Soccer (USA)"),
    entry("3832950df7b057b02bd4c83642a75d17", CartType::Split16, true, 1.0, 1.0, "RealSports Soccer (US)[a]"),
    entry("7e683e571cbe7c77f76a1648f906b932", CartType::Split16, true, 1.0, 1.0, "RealSports Tennis (USA)"),
    entry("0dc44c5bf0829649b7fec37cb0a8186b", CartType::Std32, true, 1.0, 1.0, "Rescue on Fractalus! (USA)"),
    entry("ddf7834a420f1eaae20a7a6255f80a99", CartType::Split16, true, 1.0, 1.0, "Road Runner (USA) (Proto)"),
    entry("86b358c9bca97c2089b929e3b2751908", CartType::Std32, true, 1.0, 1.0, "Rockball 5200"),
    entry("09041900aa29078bcd1eb9c83cd15549", CartType::Std32, true, 1.0, 1.0, "Rolltris"),
    entry("5dba5b478b7da9fd2c617e41fb5ccd31", CartType::NonSplit16, false, 1.0, 1.0, "Robotron 2084 (USA)"),
    entry("b8cbc918cf2bc81f941719b874f13fcb", CartType::Std32, true, 1.0, 1.0, "Runner5200"),
    entry("950aa1075eaf4ee2b2c2cfcf8f6c25b4", CartType::Std32, true, 1.0, 1.0, "Satans Hollow (Conversion)"),
    entry("b610a576cbf26a259da4ec5e38c33f09", CartType::NonSplit16, true, 1.0, 1.0, "Savage Pond (XL Conversion)"),
    entry("2892e8da83c840ce4165925b30b1f740", CartType::NonSplit16, true, 1.0, 1.0, "Savage Pond (Alternate) (XL Conversion)"),
    entry("467e72c97db63eb59011dd062c965ec9", CartType::Std32, true, 1.0, 1.0, "Scramble"),
    entry("3748e136c451471cdf58c94b251d925f", CartType::NonSplit16, true, 1.0, 1.0, "Sea Chase"),
    entry("1aadd70705d84299085845989ec614ef", CartType::NonSplit16, true, 1.0, 1.0, "Sea Dragon"),
    entry("54aa9130fa0a50ab8a74ed5b9076ff81", CartType::Std32, true, 1.0, 1.0, "Shamus (XL Conversion)"),
    entry("37ec5b9d35ae681934698fea36e99aba", CartType::Std32, true, 1.0, 1.0, "Shamus Case II (XL Conversion)"),
    entry("be75afc33f5da12974900317d824f9b9", CartType::Std32, true, 1.0, 1.0, "Sinistar"),
    entry("6151575ffb5ceddd26173f709336776b", CartType::Std32, true, 1.0, 1.0, "Slime (XL Conversion)"),
    entry("6e24e3519458c5cb95a7fd7711131f8d", CartType::Split16, true, 1.0, 1.0, "Space Dungeon (USA)"),
    entry("58430368d2c9190083f95ce923f4c996", CartType::Std8, true, 1.0, 1.0, "Space Invaders (USA)"),
    entry("802a11dfcba6229cc2f93f0f3aaeb3aa", CartType::NonSplit16, true, 1.0, 1.0, "Space Shuttle - A Journey Into Space (USA)"),
    entry("88d286e4b5fbbe7fd1694d98af9ef538", CartType::Std32, true, 1.0, 1.0, "SpeedAce 5200"),
    entry("cd1c3f732c3432c4a642732182b1ea30", CartType::Std32, true, 1.0, 1.0, "Spitfire (1984) (Atari) (Prototype)"),
    entry("221d943b1043f5bdf2b0f25282183404", CartType::Std32, true, 1.0, 1.0, "Spitfire (Prototype)"),
    entry("993e3be7199ece5c3e03092e3b3c0d1d", CartType::Split16, true, 1.0, 1.0, "Sport Goofy (1983) (Atari) (Prototype)"),
    entry("6208110dc3c0bf7b15b33246f2971b6e", CartType::Std32, true, 1.0, 1.0, "Spy Hunter (XL Conversion)"),
    entry("595703dc459cd51fed6e2a191c462969", CartType::Split16, true, 1.0, 1.0, "Stargate (1984) (Atari)"),
    entry("8378e0f92e9365a6ad42efc9b973724a", CartType::NonSplit16, true, 1.0, 1.0, "Star Island"),
    entry("e2d3a3e52bb4e3f7e489acd9974d68e2", CartType::Split16, false, 0.7, 1.0, "Star Raiders (USA)"),
    entry("64579ed5a28e3174262aa5283e41b66a", CartType::Split16, false, 0.7, 1.0, "Star Raiders (USA) (Alternate)"),
    entry("0fe34d98a055312aba9ea3cb82d3ee2a", CartType::Std32, false, 1.0, 1.0, "Star Raiders 5200(shield2-02)(32K)"),
    entry("feacc7a44f9e92d245b2cb2485b48bb6", CartType::NonSplit16, true, 1.0, 1.0, "Star Rider"),
    entry("c959b65be720a03b5479650a3af5a511", CartType::Split16, true, 1.0, 1.0, "Star Trek - Strategic Operations Simulator (USA)"),
    entry("00beaa8405c7fb90d86be5bb1b01ea66", CartType::Split16, true, 1.0, 1.0, "Star Wars - The Arcade Game (USA)"),
    entry("a2831487ab0b0b647aa590fb2b834dd9", CartType::Std8, true, 1.0, 1.0, "Star Wars - ROTJ - Death Star Battle (1983) (Parker Bros)"),
    entry("865570ff9052c1704f673e6222192336", CartType::Std4, true, 0.12, 0.25, "Super Breakout (USA)"),
    entry("dfcd77aec94b532728c3d1fef1da9d85", CartType::Std8, true, 1.0, 1.0, "Super Cobra (USA)"),
    entry("d89669f026c34de7f0da2bcb75356e27", CartType::Split16, true, 1.0, 1.0, "Super Pac Man Final (5200)"),
    entry("1569b7869bf9e46abd2c991c3b90caa6", CartType::NonSplit16, true, 1.0, 1.0, "Superfly (XL Conversion)"),
    entry("c098a0ce6c7e059264511e650ce47b35", CartType::Std32, true, 1.0, 1.0, "Tapper (XL Conversion)"),
    entry("59699274930349b4fe0ee94b21ce3c16", CartType::Std32, true, 1.0, 1.0, "Tapper (Alternate) (XL Conversion)"),
    entry("496b6a002bc7d749c02014f7ec6c303c", CartType::NonSplit16, true, 1.0, 1.0, "Tempest (1983) (Atari) (Prototype) [!]"),
    entry("5624c42cdbbffa6ec5b0f97252ce696e", CartType::Std32, true, 1.0, 1.0, "Thetris"),
    entry("6836a07ea7b2a4c071e9e86c5695b4a1", CartType::Std32, true, 1.0, 1.0, "Timeslip_5200 (XL Conversion)"),
    entry("bb3761de48d39218744d7dbb94553528", CartType::NonSplit16, true, 1.0, 1.0, "Time Runner (XL Conversion)"),
    entry("3f4d175927f891642e5c9f8a197c7d89", CartType::Std32, true, 1.0, 1.0, "Time Runner 32k (BIOS Patched)"),
    entry("bf4f25d64b364dd53fbd63562ea1bcda", CartType::Std32, true, 1.0, 1.0, "Turmoil (XL Conversion)"),
    entry("ae76668cf509a13872ccd874ac47206b", CartType::Std32, true, 1.0, 1.0, "Tutankahman"),
    entry("3649bfd2008161b9825f386dbaff88da", CartType::Std32, false, 1.0, 1.0, "Up'n Down (XL Conversion)"),
    entry("556a66d6737f0f793821e702547bc051", CartType::Std32, true, 1.0, 1.0, "Vanguard (USA)"),
    entry("560b68b7f83077444a57ebe9f932905a", CartType::NonSplit16, true, 1.0, 1.0, "Wizard of Wor (USA)"),
    entry("8e2ac7b944c30af9fae5f10c3a40f7a4", CartType::Std32, true, 1.0, 1.0, "Worm War I (XL Conversion)"),
    entry("677e4fd5bba70f5983d2c2bbfba36b7e", CartType::Std32, false, 1.0, 1.0, "Xagon (XL Conversion)"),
    entry("4f6c58c28c41f31e3a1515fe1e5d15af", CartType::Split16, true, 1.0, 1.0, "Xari Arena (USA) (Proto)"),
    entry("f35f9e5699079e2634c4bfed0c5ef2f0", CartType::Std8, true, 1.0, 1.0, "Yars Strike (XL Conversion)"),
    entry("9fee054e7d4ba2392f4ba0cb73fc99a5", CartType::Std32, true, 1.0, 1.0, "Zaxxon (USA)"),
    entry("94f17ee9875c7c32f3c3673276c5d46d", CartType::Std32, true, 1.0, 1.0, "Zaxxon 32k"),
    entry("433d3a2fc9896aa8294271a0204dc7e3", CartType::Std32, true, 1.0, 1.0, "Zaxxon 32k_final"),
    entry("77beee345b4647563e20fd896231bd47", CartType::Std8, true, 1.0, 1.0, "Zenji (USA)"),
    entry("dc45af8b0996cb6a94188b0be3be2e17", CartType::NonSplit16, true, 1.0, 1.0, "Zone Ranger (USA)"),
    entry("322cf3f7ff6515e2f363927134146b59", CartType::Super64, true, 1.0, 1.0, "Berks 4"),
    entry("cea3ea765d3626be01ed9b290c9a9bd0", CartType::Super512, true, 1.0, 1.0, "Bosconian"),
    entry("c4ea4997cf906dd20ae474eebe1d2a04", CartType::Super64, true, 1.0, 1.0, "Dropzone"),
    entry("b5cd13d78d7124b34f5c77d7f8739bb4", CartType::Std8, true, 1.0, 1.0, "Enduro"),
    entry("4e16903c352c8ed75ed9377e72ebe333", CartType::Super64, true, 1.0, 1.0, "Laser Hawk"),
    entry("4aeda426bce595851f3edd0c7d3a05fc", CartType::Super64, true, 1.0, 1.0, "Mr. Do"),
    entry("a6ed56ea679e6279d0baca2e5cafab78", CartType::Super64, true, 1.0, 1.0, "M.U.L.E"),
    entry("0ff19bfcf911b385851eb7af07cb5034", CartType::Super64, true, 1.0, 1.0, "Oil's Well (64k)"),
    entry("cdf2e6b37e3480af922159a7fc13ac43", CartType::Super64, true, 1.0, 1.0, "Rampage (64k)"),
    entry("bd4bb4dd468601a2241233778f328267", CartType::Super64, true, 1.0, 1.0, "Sea Dragon (64k)"),
    entry("122706075c94269faeea7c252a20da61", CartType::Super64, true, 1.0, 1.0, "Super Pac-Man (64k)"),
];
