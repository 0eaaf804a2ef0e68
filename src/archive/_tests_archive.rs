#[cfg(test)]
mod _tests_archive {
    use crate::archive::archive_file::{Archive, ArchiveEntry};
    use crate::canonical::InvariantKey;
    use crate::errors::CrystnetError;
    use crate::KEY_VERSION;

    fn pcu_key() -> InvariantKey {
        "3 1 1 -1 0 0 1 1 0 -1 0 1 1 0 0 -1".parse().unwrap()
    }

    fn dia_key() -> InvariantKey {
        "3 1 2 0 0 0 1 2 1 0 0 1 2 0 1 0 1 2 0 0 1".parse().unwrap()
    }

    #[test]
    fn test_record_round_trip() {
        let mut archive = Archive::new();
        archive
            .add(ArchiveEntry::new(pcu_key(), KEY_VERSION, "pcu"))
            .unwrap();
        archive
            .add(ArchiveEntry::new(dia_key(), KEY_VERSION, "dia"))
            .unwrap();

        let mut buffer = Vec::new();
        archive.write(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let reloaded = Archive::from_reader(text.as_bytes()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.lookup(&pcu_key()).unwrap().name(), "pcu");
        assert_eq!(reloaded.get_by_name("dia").unwrap().key(), &dia_key());
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let mut archive = Archive::new();
        archive
            .add(ArchiveEntry::new(pcu_key(), KEY_VERSION, "pcu"))
            .unwrap();
        assert!(archive.lookup(&dia_key()).is_none());
    }

    #[test]
    fn test_corrupt_checksum_is_rejected() {
        let entry = ArchiveEntry::new(pcu_key(), KEY_VERSION, "pcu");
        let tampered = entry.to_record().replace("id       pcu", "id       xyz");
        let result = Archive::from_reader(tampered.as_bytes());
        assert!(matches!(result, Err(CrystnetError::ArchiveLoad { .. })));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let record = "key 3 1 1 -1 0 0\nversion 1.0\nend\n";
        let result = Archive::from_reader(record.as_bytes());
        assert!(matches!(result, Err(CrystnetError::ArchiveLoad { .. })));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut archive = Archive::new();
        archive
            .add(ArchiveEntry::new(pcu_key(), KEY_VERSION, "pcu"))
            .unwrap();
        let result = archive.add(ArchiveEntry::new(pcu_key(), KEY_VERSION, "copy"));
        assert!(result.is_err());
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let mut archive = Archive::new();
        let result = archive.add(ArchiveEntry::new(pcu_key(), "0.9", "pcu"));
        assert!(result.is_err());
    }

    #[test]
    fn test_digest_is_stable() {
        let entry = ArchiveEntry::new(pcu_key(), KEY_VERSION, "pcu");
        // The digest covers key, version and name; renaming changes it.
        let renamed = ArchiveEntry::new(pcu_key(), KEY_VERSION, "qcu");
        assert_ne!(entry.digest(), renamed.digest());
        assert_eq!(entry.digest(), entry.digest());
    }
}
