// tests/common/mod.rs

//! Shared fixtures for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// A realistic port with metadata, a multi-line source array and two functions.
pub const OPENSSH: &str = "\
# Description: Secure SHell server and client tools
# URL:         https://www.openssh.com/portable.html
# Maintainer:  Jane Doe, jane at example dot org
# Depends on:  openssl, zlib linux-pam
# Nice to have: libedit

name=openssh
version=9.8p1
release=2
source=(https://cdn.openbsd.org/pub/OpenBSD/OpenSSH/portable/$name-$version.tar.gz \\
\tsshd \\
\tsshd.pam)

build() {
\tcd $name-$version

\t./configure --prefix=/usr \\
\t\t--sysconfdir=/etc/ssh \\
\t\t--with-pam
\tmake
\tmake DESTDIR=$PKG install
\tinstall -D -m 755 $SRC/sshd $PKG/etc/rc.d/sshd
}

post_install() {
\tssh-keygen -A
}
";

/// Write `content` as `Pkgfile` in a fresh temp directory.
///
/// Returns (TempDir, path) - keep the TempDir alive to prevent cleanup.
pub fn write_pkgfile(content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("Pkgfile");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
